//! Parser for the observe mini-language.
//!
//! An observe expression names one or more paths through an object attribute
//! graph, for use by a change-notification subsystem. Each segment of a path
//! carries a notify flag, and paths can branch in parallel at any position.
//!
//! ```
//! use observe_expr::{parse, Element};
//!
//! let ast = parse("a.b:c").unwrap();
//! let series = &ast.branches()[0];
//! assert_eq!(series.elements()[0], (Element::Trait("a".to_string()), true));
//! assert_eq!(series.elements()[1], (Element::Trait("b".to_string()), false));
//! assert_eq!(series.elements()[2], (Element::Trait("c".to_string()), false));
//! ```

pub mod config;
pub mod expression;
pub mod output;

pub use expression::{
    parse, Element, ExpressionError, LexError, Parallel, ParseError, Path, Series, Token,
    TokenKind,
};
