//! Observe expression lexer, parser and AST.
//!
//! An expression is a comma-separated list of series. A series is a chain of
//! elements joined by `.` (notify on the element before it) or `:` (quiet).
//! The last element of a series takes no punctuation and never notifies.
//!
//! # Supported Syntax
//!
//! - `name` - Trait with the given name
//! - `+name` - Any trait carrying the metadata `name`
//! - `items` - Members of a list, dict or set
//! - `a.b` - `a` notifies, then `b`
//! - `a:b` - `a` is quiet, then `b`
//! - `a,b` - `a` and `b` observed independently
//! - `[a,b]` - Parallel branches nested at one position of a series
//!
//! # Grammar
//!
//! ```text
//! expr      := parallel
//! parallel  := series (',' series)*
//! series    := (elem '.' | elem ':')* elem
//! elem      := NAME | '+' NAME | 'items' | '[' parallel ']'
//! NAME      := [A-Za-z_][A-Za-z0-9_]*
//! ```
//!
//! # Examples
//!
//! ```
//! // a.b:c       - a notifies, b quiet, c last
//! // [a,b]:c     - c on either a or b
//! // +meta       - traits tagged with "meta"
//! // a.items     - members of the container held by a
//! ```

pub mod ast;
pub mod error;
pub mod flatten;
pub mod lexer;
pub mod parser;

pub use ast::{Element, Parallel, Series};
pub use error::{ExpressionError, LexError, ParseError};
pub use flatten::Path;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{Parser, MAX_NESTING_DEPTH};

/// Parses an observe expression into its AST.
///
/// The root is always a [`Parallel`], even for a single series.
pub fn parse(expression: &str) -> Result<Parallel, ExpressionError> {
    Parser::parse(expression)
}
