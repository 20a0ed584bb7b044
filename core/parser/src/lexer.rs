//! FILENAME: core/parser/src/lexer.rs
//! PURPOSE: Scans a raw expression string and produces a stream of Tokens.
//! CONTEXT: This is the first stage of the parsing pipeline. It handles
//! whitespace skipping, decimal literals, and the single-character
//! operators and parentheses.
//!
//! SUPPORTED TOKENS:
//! - Numbers: DIGIT+ ( '.' DIGIT+ )?
//! - Single char: + - * / ( )

use crate::error::LexError;
use crate::token::{PositionedToken, Token};
use std::iter::Peekable;
use std::str::Chars;

pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
    /// Character offset of the next unread character.
    pos: usize,
    /// Set once the iterator has yielded `End` or an error.
    exhausted: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.chars().peekable(),
            pos: 0,
            exhausted: false,
        }
    }

    /// Advances the lexer and returns the next token.
    /// Once the input is exhausted every call returns `End`.
    pub fn next_token(&mut self) -> Result<PositionedToken, LexError> {
        self.skip_whitespace();

        let start = self.pos;
        let token = match self.bump() {
            Some('+') => Token::Plus,
            Some('-') => Token::Minus,
            Some('*') => Token::Star,
            Some('/') => Token::Slash,
            Some('(') => Token::LParen,
            Some(')') => Token::RParen,

            Some(ch) if ch.is_ascii_digit() => self.read_number(ch, start)?,

            // A leading dot can never start a valid literal
            Some('.') => return Err(self.malformed_number(String::from('.'), start)),

            None => Token::End,

            Some(ch) => return Err(LexError::UnexpectedCharacter { ch, pos: start }),
        };

        Ok(PositionedToken::new(token, start))
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.input.next()?;
        self.pos += 1;
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.input.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    fn read_digits(&mut self, text: &mut String) -> usize {
        let mut count = 0;
        while let Some(&ch) = self.input.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            text.push(ch);
            self.bump();
            count += 1;
        }
        count
    }

    fn read_number(&mut self, first_char: char, start: usize) -> Result<Token, LexError> {
        let mut text = String::from(first_char);
        self.read_digits(&mut text);

        if self.input.peek() == Some(&'.') {
            text.push('.');
            self.bump();
            if self.read_digits(&mut text) == 0 {
                return Err(LexError::MalformedNumber { text, pos: start });
            }
        }

        Ok(Token::Number(text))
    }

    /// Consumes the digits trailing a stray '.' so the error shows the whole literal.
    fn malformed_number(&mut self, mut text: String, start: usize) -> LexError {
        self.read_digits(&mut text);
        LexError::MalformedNumber { text, pos: start }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<PositionedToken, LexError>;

    /// Yields every token up to and including the first `End` (or the first
    /// error), then stops.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.next_token();
        self.exhausted = match &result {
            Ok(token) => token.is_end(),
            Err(_) => true,
        };
        Some(result)
    }
}

/// Converts the whole input into tokens, terminated by exactly one `End`.
pub fn tokenize(input: &str) -> Result<Vec<PositionedToken>, LexError> {
    let tokens = Lexer::new(input).collect::<Result<Vec<_>, _>>()?;
    log::trace!(target: "LEX", "tokenized {} tokens from {:?}", tokens.len(), input);
    Ok(tokens)
}
