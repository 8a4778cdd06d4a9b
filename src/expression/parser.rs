//! Recursive descent parser for observe expressions.

use super::ast::{Element, Parallel, Series};
use super::error::{ExpressionError, ParseError};
use super::lexer::{Lexer, Token, TokenKind};

/// Deepest group nesting accepted before parsing is abandoned.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parser over the token stream of one expression.
pub struct Parser {
    tokens: Vec<Token>,
    index: usize,
    end: usize,
    depth: usize,
}

impl Parser {
    /// Creates a parser over already tokenized input.
    ///
    /// `end` is the byte length of the source, reported by end-of-input errors.
    pub fn new(tokens: Vec<Token>, end: usize) -> Self {
        Self {
            tokens,
            index: 0,
            end,
            depth: 0,
        }
    }

    /// Tokenizes and parses an expression string.
    pub fn parse(expression: &str) -> Result<Parallel, ExpressionError> {
        log::debug!("parsing observe expression {:?}", expression);
        let tokens = Lexer::tokenize(expression)?;
        let mut parser = Parser::new(tokens, expression.len());
        let ast = parser.parse_expression()?;
        log::debug!(
            "parsed {:?} into {} branch(es), group depth {}",
            expression,
            ast.len(),
            ast.depth()
        );
        Ok(ast)
    }

    /// Parses the full token stream; trailing tokens are an error.
    pub fn parse_expression(&mut self) -> Result<Parallel, ParseError> {
        let parallel = self.parse_parallel()?;
        match self.peek() {
            None => Ok(parallel),
            Some(token) => Err(ParseError::UnexpectedToken {
                position: token.position,
                found: token.kind.clone(),
                expected: "',' or end of input".to_string(),
            }),
        }
    }

    /// parallel := series (',' series)*
    fn parse_parallel(&mut self) -> Result<Parallel, ParseError> {
        let mut branches = vec![self.parse_series()?];
        while self.eat(&TokenKind::Comma) {
            branches.push(self.parse_series()?);
        }
        Ok(Parallel::new(branches))
    }

    /// series := (element '.' | element ':')* element
    fn parse_series(&mut self) -> Result<Series, ParseError> {
        let mut elements = Vec::new();
        loop {
            let element = self.parse_element()?;
            if self.eat(&TokenKind::Dot) {
                elements.push((element, true));
            } else if self.eat(&TokenKind::Colon) {
                elements.push((element, false));
            } else {
                // The last element carries no punctuation, so it never notifies.
                elements.push((element, false));
                return Ok(Series::new(elements));
            }
        }
    }

    /// element := NAME | '+' NAME | 'items' | '[' parallel ']'
    fn parse_element(&mut self) -> Result<Element, ParseError> {
        let token = self.advance_or_end("an element")?;
        match token.kind {
            TokenKind::Name(name) => Ok(Element::Trait(name)),
            TokenKind::Items => Ok(Element::Items),
            TokenKind::Plus => {
                let token = self.advance_or_end("a metadata name")?;
                match token.kind {
                    TokenKind::Name(name) => Ok(Element::Metadata(name)),
                    found => Err(ParseError::UnexpectedToken {
                        position: token.position,
                        found,
                        expected: "a metadata name".to_string(),
                    }),
                }
            }
            TokenKind::LBracket => self.parse_group(token.position),
            found => Err(ParseError::UnexpectedToken {
                position: token.position,
                found,
                expected: "an element".to_string(),
            }),
        }
    }

    /// grouped := '[' parallel ']', with the opening bracket already consumed.
    fn parse_group(&mut self, open: usize) -> Result<Element, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep {
                position: open,
                limit: MAX_NESTING_DEPTH,
            });
        }
        self.depth += 1;
        let parallel = self.parse_parallel()?;
        self.depth -= 1;
        self.expect(TokenKind::RBracket, "']'")?;
        Ok(Element::Group(parallel.into_branches()))
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    /// Consumes the current token if it has the given kind.
    fn eat(&mut self, kind: &TokenKind) -> bool {
        match self.peek() {
            Some(token) if &token.kind == kind => {
                self.index += 1;
                true
            }
            _ => false,
        }
    }

    /// Consumes the current token, failing at end of input.
    fn advance_or_end(&mut self, expected: &str) -> Result<Token, ParseError> {
        match self.tokens.get(self.index) {
            Some(token) => {
                self.index += 1;
                Ok(token.clone())
            }
            None => Err(ParseError::UnexpectedEnd {
                position: self.end,
                expected: expected.to_string(),
            }),
        }
    }

    /// Expects a specific token kind and advances, or returns an error.
    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<(), ParseError> {
        let token = self.advance_or_end(expected)?;
        if token.kind == kind {
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken {
                position: token.position,
                found: token.kind,
                expected: expected.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(n: &str) -> Element {
        Element::Trait(n.to_string())
    }

    fn parse_err(input: &str) -> ParseError {
        match Parser::parse(input) {
            Err(ExpressionError::Parse(err)) => err,
            other => panic!("expected parse error for {:?}, got {:?}", input, other),
        }
    }

    #[test]
    fn test_parse_single_name() {
        let ast = Parser::parse("a").unwrap();
        assert_eq!(ast, Parallel::new(vec![Series::new(vec![(name("a"), false)])]));
    }

    #[test]
    fn test_parse_notify_flags() {
        let ast = Parser::parse("a.b:c").unwrap();
        assert_eq!(ast.len(), 1);
        assert_eq!(
            ast.branches()[0].elements(),
            &[(name("a"), true), (name("b"), false), (name("c"), false)]
        );
    }

    #[test]
    fn test_parse_group_in_middle() {
        let ast = Parser::parse("a.[b,c].d").unwrap();
        let group = Element::Group(vec![
            Series::new(vec![(name("b"), false)]),
            Series::new(vec![(name("c"), false)]),
        ]);
        assert_eq!(
            ast.branches()[0].elements(),
            &[(name("a"), true), (group, true), (name("d"), false)]
        );
    }

    #[test]
    fn test_parse_metadata_and_items() {
        let ast = Parser::parse("+meta:items").unwrap();
        assert_eq!(
            ast.branches()[0].elements(),
            &[
                (Element::Metadata("meta".to_string()), false),
                (Element::Items, false)
            ]
        );
    }

    #[test]
    fn test_parse_empty_fails_at_zero() {
        assert_eq!(
            parse_err(""),
            ParseError::UnexpectedEnd {
                position: 0,
                expected: "an element".to_string()
            }
        );
    }

    #[test]
    fn test_parse_dangling_dot() {
        assert_eq!(parse_err("a.").position(), 2);
        assert_eq!(parse_err("a:").position(), 2);
    }

    #[test]
    fn test_parse_leading_dot() {
        assert_eq!(
            parse_err(".a"),
            ParseError::UnexpectedToken {
                position: 0,
                found: TokenKind::Dot,
                expected: "an element".to_string()
            }
        );
    }

    #[test]
    fn test_parse_plus_requires_name() {
        assert!(matches!(parse_err("+"), ParseError::UnexpectedEnd { position: 1, .. }));
        assert!(matches!(
            parse_err("+items"),
            ParseError::UnexpectedToken {
                position: 1,
                found: TokenKind::Items,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_unclosed_group() {
        assert_eq!(
            parse_err("[a,b"),
            ParseError::UnexpectedEnd {
                position: 4,
                expected: "']'".to_string()
            }
        );
    }

    #[test]
    fn test_parse_trailing_tokens() {
        assert!(matches!(
            parse_err("a b"),
            ParseError::UnexpectedToken { position: 2, .. }
        ));
        assert!(matches!(
            parse_err("[a]]"),
            ParseError::UnexpectedToken {
                position: 3,
                found: TokenKind::RBracket,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_nesting_limit() {
        let ok = format!("{}a{}", "[".repeat(MAX_NESTING_DEPTH), "]".repeat(MAX_NESTING_DEPTH));
        assert_eq!(Parser::parse(&ok).unwrap().depth(), MAX_NESTING_DEPTH);

        let deep = format!(
            "{}a{}",
            "[".repeat(MAX_NESTING_DEPTH + 1),
            "]".repeat(MAX_NESTING_DEPTH + 1)
        );
        assert_eq!(
            parse_err(&deep),
            ParseError::NestingTooDeep {
                position: MAX_NESTING_DEPTH,
                limit: MAX_NESTING_DEPTH
            }
        );
    }
}
