//! FILENAME: core/parser/src/lib.rs
//! PURPOSE: Library root for the arithmetic expression parser.
//! CONTEXT: This module exposes the lexer, parser, and AST components
//! needed to convert expression strings into evaluatable expression trees.
//!
//! PIPELINE: Expression String --> Lexer --> Tokens --> Parser --> AST --> Evaluator
//!
//! SUPPORTED FEATURES:
//! - Decimal literals: 42, 3.14
//! - Arithmetic: +, -, *, /
//! - Unary sign: -5, +5, -(-5)
//! - Parentheses for grouping

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;


// Re-export commonly used types for convenience
pub use ast::{BinaryOperator, Expression};
pub use error::{LexError, ParseError, ParseResult};
pub use lexer::{tokenize, Lexer};
pub use parser::{parse, parse_tokens, Parser, DEFAULT_MAX_DEPTH};
pub use token::{PositionedToken, Token};
