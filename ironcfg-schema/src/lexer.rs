//! Tokenizer for normalized schema text.

use crate::error::ParseError;
use std::iter::Peekable;
use std::str::Chars;

/// Token kinds of the schema language.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Identifier or keyword (`DEF_CONFIG`, `std`, `u32`, field names).
    Ident(String),
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `;`
    Semicolon,
    /// `<`
    LAngle,
    /// `>`
    RAngle,
    /// `::`
    PathSep,
    /// End of input.
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ident(name) => write!(f, "{name}"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::Semicolon => write!(f, ";"),
            Self::LAngle => write!(f, "<"),
            Self::RAngle => write!(f, ">"),
            Self::PathSep => write!(f, "::"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// A token with its source position (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token kind.
    pub kind: TokenKind,
    /// Line number.
    pub line: usize,
    /// Column number.
    pub column: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }

    /// Returns the identifier text if this token is an identifier.
    #[must_use]
    pub fn ident(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Ident(name) => Some(name),
            _ => None,
        }
    }
}

/// Splits schema text into tokens.
pub struct Tokenizer<'a> {
    source: &'a str,
    line: usize,
    column: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            line: 1,
            column: 1,
        }
    }

    /// Tokenizes the whole input. The last token is always [`TokenKind::Eof`].
    ///
    /// # Errors
    /// Returns `ParseError::UnrecognizedLine` for a character that cannot
    /// start a token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        let mut chars = self.source.chars().peekable();

        loop {
            self.skip_whitespace(&mut chars);
            let (line, column) = (self.line, self.column);
            let Some(&ch) = chars.peek() else {
                tokens.push(Token::new(TokenKind::Eof, line, column));
                break;
            };

            let kind = match ch {
                '{' => self.single(&mut chars, TokenKind::LBrace),
                '}' => self.single(&mut chars, TokenKind::RBrace),
                ';' => self.single(&mut chars, TokenKind::Semicolon),
                '<' => self.single(&mut chars, TokenKind::LAngle),
                '>' => self.single(&mut chars, TokenKind::RAngle),
                ':' => {
                    self.advance(&mut chars);
                    if chars.peek() != Some(&':') {
                        return Err(self.unrecognized(line));
                    }
                    self.advance(&mut chars);
                    TokenKind::PathSep
                }
                c if is_ident_start(c) => self.ident(&mut chars),
                _ => return Err(self.unrecognized(line)),
            };
            tokens.push(Token::new(kind, line, column));
        }

        Ok(tokens)
    }

    fn single(&mut self, chars: &mut Peekable<Chars<'_>>, kind: TokenKind) -> TokenKind {
        self.advance(chars);
        kind
    }

    fn ident(&mut self, chars: &mut Peekable<Chars<'_>>) -> TokenKind {
        let mut name = String::new();
        while let Some(&c) = chars.peek() {
            if !is_ident_continue(c) {
                break;
            }
            name.push(c);
            self.advance(chars);
        }
        TokenKind::Ident(name)
    }

    fn skip_whitespace(&mut self, chars: &mut Peekable<Chars<'_>>) {
        while let Some(&c) = chars.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.advance(chars);
        }
    }

    fn advance(&mut self, chars: &mut Peekable<Chars<'_>>) {
        if let Some(c) = chars.next() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn unrecognized(&self, line: usize) -> ParseError {
        ParseError::unrecognized(line, line_text(self.source, line))
    }
}

/// Returns the trimmed text of a 1-based line of `source`.
#[must_use]
pub fn line_text(source: &str, line: usize) -> &str {
    source
        .split('\n')
        .nth(line.saturating_sub(1))
        .map_or("", str::trim)
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
