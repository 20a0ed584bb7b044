//! FILENAME: app/cli/src/output.rs
//! PURPOSE: Formats a successful evaluation or a rejected input for printing.

use crate::config::OutputFormat;
use crate::error::CliError;
use parser::{Expression, ParseError};
use serde::Serialize;

/// A parsed tree together with its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub expr: Expression,
    pub value: f64,
}

/// Deepest tree emitted under `ast` in json output. The derived serializer
/// recurses per level, so deeper trees are reported as `null`.
pub const MAX_JSON_AST_DEPTH: usize = 512;

#[derive(Serialize)]
struct JsonSuccess<'a> {
    input: &'a str,
    ast: Option<&'a Expression>,
    /// `null` for infinities and NaN, which JSON cannot carry.
    value: Option<f64>,
    display: String,
}

#[derive(Serialize)]
struct JsonFailure<'a> {
    input: &'a str,
    error: String,
    position: usize,
}

/// Rust's default decimal form: `14`, `0.5`, `inf`, `-inf`, `NaN`.
pub fn format_value(value: f64) -> String {
    value.to_string()
}

pub fn render_success(
    format: OutputFormat,
    input: &str,
    evaluation: &Evaluation,
) -> Result<String, CliError> {
    let display = format_value(evaluation.value);
    match format {
        OutputFormat::Text => Ok(display),
        OutputFormat::Ast => Ok(format!("{}\n{}", evaluation.expr, display)),
        OutputFormat::Json => {
            let body = JsonSuccess {
                input,
                ast: Some(&evaluation.expr).filter(|e| e.depth() <= MAX_JSON_AST_DEPTH),
                value: Some(evaluation.value).filter(|v| v.is_finite()),
                display,
            };
            Ok(serde_json::to_string(&body)?)
        }
    }
}

pub fn render_failure(
    format: OutputFormat,
    input: &str,
    error: &ParseError,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Text | OutputFormat::Ast => Ok(error.render(input)),
        OutputFormat::Json => {
            let body = JsonFailure {
                input,
                error: error.to_string(),
                position: error.position(),
            };
            Ok(serde_json::to_string(&body)?)
        }
    }
}
