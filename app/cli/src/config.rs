//! FILENAME: app/cli/src/config.rs
//! PURPOSE: Command-line and environment configuration for the calculator.
//! CONTEXT: `Args` is the raw clap surface; `Config` is what `run` consumes,
//! so tests can build one without going through argument parsing.

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use parser::DEFAULT_MAX_DEPTH;
use std::path::PathBuf;

/// Evaluates one arithmetic expression (+ - * / unary sign and parentheses).
#[derive(Parser, Debug)]
#[command(name = "calc", version, about, long_about = None)]
pub struct Args {
    /// Expression to evaluate. The first line of stdin is used when omitted.
    pub expression: Option<String>,

    /// Read the expression from a file instead.
    #[arg(short, long, conflicts_with = "expression")]
    pub file: Option<PathBuf>,

    /// How the result (or error) is printed.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// off, error, warn, info, debug or trace.
    #[arg(long, env = "CALC_LOG", default_value = "warn")]
    pub log_level: LevelFilter,

    /// Also append log lines to this file (truncated at startup).
    #[arg(long, env = "CALC_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Maximum nesting of parentheses and unary signs.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The value alone.
    #[default]
    Text,
    /// A JSON object with the input, tree and value.
    Json,
    /// The parenthesized tree, then the value.
    Ast,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub input: InputSource,
    pub format: OutputFormat,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: InputSource::Stdin,
            format: OutputFormat::Text,
            log_level: LevelFilter::Warn,
            log_file: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Config {
    pub fn inline(expression: impl Into<String>) -> Self {
        Config {
            input: InputSource::Inline(expression.into()),
            ..Config::default()
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let input = match (args.expression, args.file) {
            (Some(expression), _) => InputSource::Inline(expression),
            (None, Some(path)) => InputSource::File(path),
            (None, None) => InputSource::Stdin,
        };

        Config {
            input,
            format: args.format,
            log_level: args.log_level,
            log_file: args.log_file,
            max_depth: args.max_depth,
        }
    }
}
