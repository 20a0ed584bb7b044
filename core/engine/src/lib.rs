//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the expression engine.
//! CONTEXT: Re-exports the evaluator and the parser types it walks, and
//! offers the full text-to-number pipeline in one call.

pub mod evaluator;

// Re-export commonly used types at the crate root
pub use evaluator::evaluate;
pub use parser::{BinaryOperator, Expression, LexError, ParseError};

/// Parses and evaluates `input`. Only lexing and parsing can fail.
pub fn calculate(input: &str) -> Result<f64, ParseError> {
    let expr = parser::parse(input)?;
    Ok(evaluate(&expr))
}
