//! Tokenizer for observe expressions.

use super::error::LexError;
use std::fmt;

const ITEMS_KEYWORD: &str = "items";

/// Kinds of token in an observe expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Name(String),
    Dot,
    Colon,
    Comma,
    Plus,
    LBracket,
    RBracket,
    /// The reserved word `items`
    Items,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Name(name) => f.write_str(name),
            TokenKind::Dot => f.write_str("."),
            TokenKind::Colon => f.write_str(":"),
            TokenKind::Comma => f.write_str(","),
            TokenKind::Plus => f.write_str("+"),
            TokenKind::LBracket => f.write_str("["),
            TokenKind::RBracket => f.write_str("]"),
            TokenKind::Items => f.write_str(ITEMS_KEYWORD),
        }
    }
}

/// A token and the byte offset where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

/// Lexer over an expression string.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Splits the whole input into tokens, skipping whitespace.
    pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::new();
        while let Some(token) = lexer.next_token()? {
            log::trace!("token {:?} at {}", token.kind, token.position);
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();
        let start = self.position;
        let ch = match self.peek() {
            Some(ch) => ch,
            None => return Ok(None),
        };

        let kind = match ch {
            '.' => TokenKind::Dot,
            ':' => TokenKind::Colon,
            ',' => TokenKind::Comma,
            '+' => TokenKind::Plus,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            c if is_name_start(c) => {
                let name = self.read_name();
                return Ok(Some(Token {
                    kind: if name == ITEMS_KEYWORD {
                        TokenKind::Items
                    } else {
                        TokenKind::Name(name.to_string())
                    },
                    position: start,
                }));
            }
            c => {
                return Err(LexError {
                    character: c,
                    position: start,
                })
            }
        };
        self.next();
        Ok(Some(Token {
            kind,
            position: start,
        }))
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Returns the current character and advances past it.
    fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.next();
            } else {
                break;
            }
        }
    }

    /// Reads the longest `[A-Za-z_][A-Za-z0-9_]*` run at the cursor.
    fn read_name(&mut self) -> &'a str {
        let start = self.position;
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                self.next();
            } else {
                break;
            }
        }
        &self.input[start..self.position]
    }
}

fn is_name_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::tokenize(input)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_tokenize_punctuation() {
        assert_eq!(
            kinds(".:,+[]"),
            vec![
                TokenKind::Dot,
                TokenKind::Colon,
                TokenKind::Comma,
                TokenKind::Plus,
                TokenKind::LBracket,
                TokenKind::RBracket,
            ]
        );
    }

    #[test]
    fn test_tokenize_names() {
        assert_eq!(
            kinds("_private.name2"),
            vec![
                TokenKind::Name("_private".to_string()),
                TokenKind::Dot,
                TokenKind::Name("name2".to_string()),
            ]
        );
    }

    #[test]
    fn test_items_keyword_requires_full_match() {
        assert_eq!(kinds("items"), vec![TokenKind::Items]);
        assert_eq!(kinds("itemsX"), vec![TokenKind::Name("itemsX".to_string())]);
        assert_eq!(kinds("item"), vec![TokenKind::Name("item".to_string())]);
        assert_eq!(kinds("my_items"), vec![TokenKind::Name("my_items".to_string())]);
    }

    #[test]
    fn test_whitespace_skipped_and_positions_kept() {
        let tokens = Lexer::tokenize(" a\t.\n b ").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![1, 3, 6]);
    }

    #[test]
    fn test_empty_input() {
        assert!(Lexer::tokenize("").unwrap().is_empty());
        assert!(Lexer::tokenize("   ").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_character() {
        let err = Lexer::tokenize("a.b-c").unwrap_err();
        assert_eq!(err.character, '-');
        assert_eq!(err.position, 3);
    }

    #[test]
    fn test_name_cannot_start_with_digit() {
        let err = Lexer::tokenize("a.1b").unwrap_err();
        assert_eq!(err.character, '1');
        assert_eq!(err.position, 2);
    }

    #[test]
    fn test_non_ascii_position_is_byte_offset() {
        let err = Lexer::tokenize("é").unwrap_err();
        assert_eq!(err.character, 'é');
        assert_eq!(err.position, 0);

        let err = Lexer::tokenize("a:é").unwrap_err();
        assert_eq!(err.position, 2);
    }
}
