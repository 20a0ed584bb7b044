//! FILENAME: core/parser/src/token.rs
//! PURPOSE: Token definitions for the expression lexer.
//! CONTEXT: Tokens are the atomic units produced by the lexer and consumed by the parser.

/// Tokens recognized by the expression lexer.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Decimal literal, kept as the exact text matched.
    Number(String),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,

    // Delimiters
    LParen,
    RParen,

    End,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(text) => write!(f, "{}", text),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::End => write!(f, "end of input"),
        }
    }
}

/// A token together with the character offset where it starts.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PositionedToken {
    pub token: Token,
    /// Zero-based character offset. For `End` this is the input length.
    pub pos: usize,
}

impl PositionedToken {
    pub fn new(token: Token, pos: usize) -> Self {
        PositionedToken { token, pos }
    }

    pub fn is_end(&self) -> bool {
        self.token == Token::End
    }
}
