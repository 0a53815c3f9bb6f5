//! Field-name resolution for filter expressions.
//!
//! The tokenizer asks the resolver whether an accumulated buffer is a
//! complete field identifier so it can end an operand token even when an
//! operator is glued on with no whitespace (`LEVEL==INFO`). Property-style
//! fields (`PROP.myapp.region`) are excluded from that early cut because
//! their names may contain arbitrary characters.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Prefix marking property-style fields. Compared case-insensitively.
pub const PROP_FIELD: &str = "PROP.";

/// Standard log-record field names.
const KEYWORDS: [&str; 11] = [
    "LOGGER",
    "LEVEL",
    "MSG",
    "TIMESTAMP",
    "THREAD",
    "CLASS",
    "METHOD",
    "FILE",
    "LINE",
    "NDC",
    "EXCEPTION",
];

/// Answers whether a name is a recognized field identifier.
///
/// Implementations must be pure: the tokenizer may query the same name any
/// number of times while scanning.
pub trait FieldResolver {
    fn is_field(&self, name: &str) -> bool;
}

/// Resolver over the standard log-record fields, optionally extended with
/// custom names loaded from a [`FieldsConfig`].
#[derive(Debug, Clone, Default)]
pub struct LogEventFields {
    /// Extra recognized names, stored upper-cased.
    extra: HashSet<String>,
}

impl LogEventFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extends the standard field set with custom names, e.g. for log
    /// schemas that carry additional columns.
    pub fn with_extra_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extra: fields
                .into_iter()
                .map(|f| f.as_ref().to_uppercase())
                .collect(),
        }
    }

    pub fn from_config(config: &FieldsConfig) -> Self {
        Self::with_extra_fields(&config.extra_fields)
    }
}

impl FieldResolver for LogEventFields {
    fn is_field(&self, name: &str) -> bool {
        let upper = name.to_uppercase();
        upper.starts_with(PROP_FIELD)
            || KEYWORDS.contains(&upper.as_str())
            || self.extra.contains(&upper)
    }
}

#[derive(Debug, Error)]
pub enum FieldsConfigError {
    #[error("Failed to read fields config '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse fields config '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Extra field names recognized in addition to the standard set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FieldsConfig {
    pub extra_fields: Vec<String>,
}

pub fn load_fields_config(path: &Path) -> Result<FieldsConfig, FieldsConfigError> {
    let text = fs::read_to_string(path).map_err(|source| FieldsConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| FieldsConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}
