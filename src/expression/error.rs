//! Error types for observe expression lexing and parsing.
//!
//! All positions are byte offsets into the expression string.

use super::lexer::TokenKind;

/// A character that starts no token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unexpected character '{character}' at position {position}")]
pub struct LexError {
    pub character: char,
    pub position: usize,
}

/// The token stream does not match the grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Unexpected token at a specific position.
    #[error("Unexpected token '{found}' at position {position}, expected {expected}")]
    UnexpectedToken {
        position: usize,
        found: TokenKind,
        expected: String,
    },
    /// Input ended while more was required.
    #[error("Unexpected end of input at position {position}, expected {expected}")]
    UnexpectedEnd { position: usize, expected: String },
    /// Groups nested deeper than the parser allows.
    #[error("Groups nested deeper than {limit} levels at position {position}")]
    NestingTooDeep { position: usize, limit: usize },
}

impl ParseError {
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { position, .. }
            | ParseError::UnexpectedEnd { position, .. }
            | ParseError::NestingTooDeep { position, .. } => *position,
        }
    }
}

/// Errors that can occur while turning an expression string into an AST.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpressionError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl ExpressionError {
    /// Byte offset of the offending character or token.
    pub fn position(&self) -> usize {
        match self {
            ExpressionError::Lex(err) => err.position,
            ExpressionError::Parse(err) => err.position(),
        }
    }
}
