use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// A tool to compile infix log-filter expressions to postfix notation
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The filter expression, e.g. "LEVEL == ERROR && MSG ~= 'time out'"
    pub expression: Option<String>,

    /// Read the expression from a file instead of the command line
    #[arg(short = 'f', long, conflicts_with = "expression")]
    pub file: Option<PathBuf>,

    /// Also print the token stream, one token per line
    #[arg(short, long)]
    pub tokens: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// TOML file declaring extra recognized field names
    #[arg(short, long, env = "LOG_RULE_CONFIG")]
    pub config: Option<PathBuf>,

    /// When to use colored output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Increase verbosity (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress warnings and diagnostics
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The postfix expression, operators highlighted
    Text,
    /// Expression, postfix form and token stream as JSON
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Color when writing to a terminal
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}
