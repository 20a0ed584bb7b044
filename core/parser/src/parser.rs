//! FILENAME: core/parser/src/parser.rs
//! PURPOSE: Recursive descent parser that converts a sequence of Tokens into an AST.
//! CONTEXT: This is the second stage of the parsing pipeline. It takes tokens
//! from the Lexer and builds an Expression tree that can be evaluated.
//!
//! GRAMMAR (precedence low to high, binary operators left-associative):
//!   expression --> term ( ("+" | "-") term )*
//!   term       --> unary ( ("*" | "/") unary )*
//!   unary      --> ("+" | "-") unary | primary
//!   primary    --> NUMBER | "(" expression ")"

use crate::ast::{BinaryOperator, Expression};
use crate::error::{ParseError, ParseResult};
use crate::lexer::tokenize;
use crate::token::{PositionedToken, Token};

/// Default limit on nested parentheses and unary operators.
pub const DEFAULT_MAX_DEPTH: usize = 256;

const EXPECTED_OPERAND: &str = "a number or '('";
const EXPECTED_RPAREN: &str = "')'";

/// The Parser holds the token sequence and a cursor into it.
pub struct Parser {
    tokens: Vec<PositionedToken>,
    /// Index of the current token. Never moves past the first `End`.
    index: usize,
    depth: usize,
    max_depth: usize,
}

impl Parser {
    /// Creates a parser over a token sequence.
    /// An `End` token is appended if the sequence does not already end with one.
    pub fn new(mut tokens: Vec<PositionedToken>) -> Self {
        if !tokens.last().is_some_and(PositionedToken::is_end) {
            let end_pos = tokens
                .last()
                .map(|t| t.pos + t.token.to_string().chars().count())
                .unwrap_or(0);
            tokens.push(PositionedToken::new(Token::End, end_pos));
        }

        Parser {
            tokens,
            index: 0,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Overrides the nesting limit for parentheses and unary operators.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses the entire token sequence and returns the AST.
    pub fn parse(&mut self) -> ParseResult<Expression> {
        let expr = self.parse_expression()?;

        // Ensure we consumed all tokens
        let current = self.current();
        if !current.is_end() {
            return Err(ParseError::TrailingInput {
                found: current.token.clone(),
                pos: current.pos,
            });
        }

        log::debug!(
            target: "PARSE",
            "parsed {} nodes, depth {}: {}",
            expr.node_count(),
            expr.depth(),
            expr
        );
        Ok(expr)
    }

    fn current(&self) -> &PositionedToken {
        &self.tokens[self.index]
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        if !self.current().is_end() {
            self.index += 1;
        }
    }

    /// Builds the error for `current` appearing where `expected` was required.
    fn unexpected(&self, expected: &'static str) -> ParseError {
        let current = self.current();
        match current.token {
            Token::End => ParseError::UnexpectedEnd {
                pos: current.pos,
                expected,
            },
            _ => ParseError::UnexpectedToken {
                found: current.token.clone(),
                pos: current.pos,
                expected,
            },
        }
    }

    /// Checks if the current token matches the expected token.
    /// If it matches, advances and returns Ok. Otherwise returns an error.
    fn expect(&mut self, expected: Token, description: &'static str) -> ParseResult<()> {
        if self.current().token == expected {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(description))
        }
    }

    fn enter(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ParseError::NestingTooDeep {
                pos: self.current().pos,
                limit: self.max_depth,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Parses additive expressions (+ and -).
    fn parse_expression(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_term()?;

        loop {
            let op = match self.current().token {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Subtract,
                _ => break,
            };

            self.advance();
            let right = self.parse_term()?;

            left = Expression::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parses multiplicative expressions (* and /).
    fn parse_term(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_unary()?;

        loop {
            let op = match self.current().token {
                Token::Star => BinaryOperator::Multiply,
                Token::Slash => BinaryOperator::Divide,
                _ => break,
            };

            self.advance();
            let right = self.parse_unary()?;

            left = Expression::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parses unary sign. '+' passes its operand through unchanged.
    fn parse_unary(&mut self) -> ParseResult<Expression> {
        let negate = match self.current().token {
            Token::Minus => true,
            Token::Plus => false,
            _ => return self.parse_primary(),
        };

        self.advance();
        self.enter()?;
        let operand = self.parse_unary();
        self.leave();
        let operand = operand?;

        if negate {
            Ok(Expression::negate(operand))
        } else {
            Ok(operand)
        }
    }

    /// Parses primary expressions (number literals and parentheses).
    fn parse_primary(&mut self) -> ParseResult<Expression> {
        match &self.current().token {
            Token::Number(text) => {
                let value = number_value(text);
                self.advance();
                Ok(Expression::Number(value))
            }

            // Parenthesized expression
            Token::LParen => {
                self.advance();
                self.enter()?;
                let expr = self.parse_expression();
                self.leave();
                let expr = expr?;
                self.expect(Token::RParen, EXPECTED_RPAREN)?;
                Ok(expr)
            }

            _ => Err(self.unexpected(EXPECTED_OPERAND)),
        }
    }
}

/// Standard decimal conversion. Overflow yields infinity, which is accepted.
fn number_value(text: &str) -> f64 {
    match text.parse::<f64>() {
        Ok(value) => value,
        Err(e) => {
            log::warn!(target: "PARSE", "number literal {:?} did not convert: {}", text, e);
            f64::NAN
        }
    }
}

/// Parses an already tokenized sequence.
pub fn parse_tokens(tokens: Vec<PositionedToken>) -> ParseResult<Expression> {
    Parser::new(tokens).parse()
}

/// Convenience function to tokenize and parse an expression string directly.
pub fn parse(input: &str) -> ParseResult<Expression> {
    let tokens = tokenize(input)?;
    parse_tokens(tokens)
}
