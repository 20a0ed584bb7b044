//! FILENAME: app/cli/src/lib.rs
// PURPOSE: Host driver around the parser and engine crates.
// CONTEXT: Acquires one expression (argument, file, or first stdin line),
// runs it through the pipeline and prints the value or the first error.

use std::io::{BufRead, Write};

use parser::{ParseError, Parser};

#[macro_use]
pub mod logging;
pub mod config;
pub mod error;
pub mod output;

pub use config::{Args, Config, InputSource, OutputFormat};
pub use error::CliError;
pub use output::Evaluation;

// Macros expand through this re-export so callers need no direct `log` dependency
#[doc(hidden)]
pub use log;

/// Reads the expression text from the configured source.
/// Line terminators are stripped from stdin input.
pub fn read_input(source: &InputSource, mut stdin: impl BufRead) -> Result<String, CliError> {
    match source {
        InputSource::Inline(expression) => Ok(expression.clone()),
        InputSource::File(path) => {
            std::fs::read_to_string(path).map_err(|source| CliError::ReadFile {
                path: path.clone(),
                source,
            })
        }
        InputSource::Stdin => {
            let mut line = String::new();
            if stdin.read_line(&mut line)? == 0 {
                return Err(CliError::EmptyInput);
            }
            let trimmed = line.trim_end_matches(['\n', '\r']).len();
            line.truncate(trimmed);
            Ok(line)
        }
    }
}

/// Tokenizes, parses and evaluates `input` with the given nesting limit.
pub fn evaluate_input(input: &str, max_depth: usize) -> Result<Evaluation, ParseError> {
    let tokens = parser::tokenize(input)?;
    let expr = Parser::new(tokens).with_max_depth(max_depth).parse()?;
    let value = engine::evaluate(&expr);
    Ok(Evaluation { expr, value })
}

/// Runs one calculation. Returns `Ok(false)` when the input was rejected;
/// the rendered error has then been written to `out` (json) or `err`.
/// Rejections are logged at debug level only, so the default console shows
/// the rendered error once.
pub fn run(
    config: &Config,
    stdin: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<bool, CliError> {
    log_enter!("CLI", "run", "format={:?} max_depth={}", config.format, config.max_depth);

    let input = read_input(&config.input, stdin)?;
    log_debug!("CLI", "input={:?}", input);

    let accepted = match evaluate_input(&input, config.max_depth) {
        Ok(evaluation) => {
            log_info!("EVAL", "{} = {}", evaluation.expr, evaluation.value);
            writeln!(out, "{}", output::render_success(config.format, &input, &evaluation)?)?;
            true
        }
        Err(e) => {
            log_debug!("EVAL", "rejected input={:?} err={}", input, e);
            let rendered = output::render_failure(config.format, &input, &e)?;
            match config.format {
                OutputFormat::Json => writeln!(out, "{}", rendered)?,
                OutputFormat::Text | OutputFormat::Ast => writeln!(err, "{}", rendered)?,
            }
            false
        }
    };

    log_exit!("CLI", "run", "accepted={}", accepted);
    Ok(accepted)
}
