//! FILENAME: core/parser/src/error.rs
//! PURPOSE: Error taxonomy for the lexing and parsing stages.
//! CONTEXT: Either error aborts the pipeline; there is no partial AST and no
//! recovery. Evaluation has no error type because it is total.

use crate::token::Token;
use thiserror::Error;

/// The lexer met text that starts no token.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum LexError {
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedCharacter { ch: char, pos: usize },

    /// A '.' without digits on both sides, such as `.`, `.5` or `1.`.
    #[error("malformed number literal '{text}' at position {pos}")]
    MalformedNumber { text: String, pos: usize },
}

impl LexError {
    pub fn position(&self) -> usize {
        match self {
            LexError::UnexpectedCharacter { pos, .. } => *pos,
            LexError::MalformedNumber { pos, .. } => *pos,
        }
    }
}

/// The token sequence does not match the grammar.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Input ran out where an operand or ')' was required.
    #[error("unexpected end of input at position {pos}, expected {expected}")]
    UnexpectedEnd { pos: usize, expected: &'static str },

    #[error("unexpected token '{found}' at position {pos}, expected {expected}")]
    UnexpectedToken {
        found: Token,
        pos: usize,
        expected: &'static str,
    },

    /// A complete expression was parsed but tokens remain before END.
    #[error("unexpected trailing input '{found}' at position {pos}")]
    TrailingInput { found: Token, pos: usize },

    #[error("expression nested deeper than {limit} levels at position {pos}")]
    NestingTooDeep { pos: usize, limit: usize },
}

impl ParseError {
    /// Character offset of the offending token or character.
    pub fn position(&self) -> usize {
        match self {
            ParseError::Lex(e) => e.position(),
            ParseError::UnexpectedEnd { pos, .. } => *pos,
            ParseError::UnexpectedToken { pos, .. } => *pos,
            ParseError::TrailingInput { pos, .. } => *pos,
            ParseError::NestingTooDeep { pos, .. } => *pos,
        }
    }

    /// Renders the input, a caret under the offending position, and the message.
    pub fn render(&self, input: &str) -> String {
        let line: String = input
            .chars()
            .map(|c| if matches!(c, '\n' | '\r' | '\t') { ' ' } else { c })
            .collect();
        let mut out = String::with_capacity(line.len() * 2 + 64);
        out.push_str(line.trim_end());
        out.push('\n');
        out.extend(std::iter::repeat(' ').take(self.position()));
        out.push('^');
        out.push('\n');
        out.push_str(&self.to_string());
        out
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
