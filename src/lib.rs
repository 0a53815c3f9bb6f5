pub mod cli;
pub mod fields;
pub mod rule;

use colored::Colorize;
use serde::Serialize;

pub use cli::{Cli, ColorMode, OutputFormat, cli_parse};
pub use fields::{
    FieldResolver, FieldsConfig, FieldsConfigError, LogEventFields, PROP_FIELD, load_fields_config,
};
pub use rule::{ExpressionTokenizer, OPERATORS, convert, is_operand, precedes, split_postfix};

/// One compiled expression, as emitted by `--format json`.
#[derive(Debug, Serialize)]
struct ConversionReport {
    expression: String,
    postfix: String,
    tokens: Vec<String>,
}

/// Warn about likely mistakes before converting. Conversion itself never
/// fails: an unmatched `)` ends its group early and an unmatched `(`
/// absorbs the rest of the expression, so the lenient result can surprise.
fn print_expression_warnings(expression: &str) {
    let mut opens = 0usize;
    let mut closes = 0usize;
    let mut quotes = 0usize;
    let mut in_quote = false;

    for ch in expression.chars() {
        match ch {
            '\'' => {
                quotes += 1;
                in_quote = !in_quote;
            }
            '(' if !in_quote => opens += 1,
            ')' if !in_quote => closes += 1,
            _ => {}
        }
    }

    if opens != closes {
        eprintln!(
            "Warning: unbalanced parentheses ({} open, {} close); grouping may not be what you expect",
            opens, closes
        );
    }
    if quotes % 2 != 0 {
        eprintln!("Warning: unbalanced single quotes; the last literal runs to the end of the expression");
    }
}

fn tokenize_all(expression: &str, resolver: &dyn FieldResolver) -> Vec<String> {
    let mut tokenizer = ExpressionTokenizer::new(expression, resolver);
    let mut tokens = Vec::new();
    while let Some(token) = tokenizer.next_token() {
        tokens.push(token);
    }
    tokens
}

fn read_expression(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(expression) = &cli.expression {
        return Ok(expression.clone());
    }
    if let Some(path) = &cli.file {
        let text = std::fs::read_to_string(path).map_err(|e| {
            format!("Failed to read expression file '{}': {}", path.display(), e)
        })?;
        return Ok(text.trim_end_matches(['\n', '\r']).to_string());
    }
    Err("No expression given; pass one as an argument or via --file".into())
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = cli_parse();
    let verbose = cli.verbose;
    let quiet = cli.quiet;

    // Set up color handling based on user preference
    match cli.color {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {
            // Default behavior - let the terminal decide
        }
    }

    let resolver = if let Some(path) = &cli.config {
        let config = load_fields_config(path)
            .map_err(|e| format!("Failed to load fields config: {}", e))?;
        LogEventFields::from_config(&config)
    } else {
        LogEventFields::new()
    };

    let expression = read_expression(&cli)?;

    if verbose > 0 && !quiet {
        eprintln!("Expression: {}", expression);
        if let Some(config_path) = &cli.config {
            eprintln!("Fields config: {}", config_path.display());
        }
    }

    if !quiet {
        print_expression_warnings(&expression);
    }

    let tokens = tokenize_all(&expression, &resolver);
    let postfix = convert(&expression, &resolver);

    if verbose > 1 && !quiet {
        eprintln!("Token count: {}", tokens.len());
    }

    match cli.format {
        OutputFormat::Text => {
            if cli.tokens {
                for token in &tokens {
                    println!("{}", token);
                }
            }
            for token in split_postfix(&postfix) {
                if is_operand(&token) {
                    print!("{} ", token);
                } else {
                    print!("{} ", token.cyan().bold());
                }
            }
            println!();
        }
        OutputFormat::Json => {
            let report = ConversionReport {
                expression,
                postfix,
                tokens,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
