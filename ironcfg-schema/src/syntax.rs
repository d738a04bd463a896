//! Statement parser.
//!
//! Groups the token stream into the three statement shapes of the schema
//! language by recursive descent:
//!
//! ```text
//! open   ::= "DEF_CONFIG" IDENT "{"
//! close  ::= "}" ";"
//! field  ::= type IDENT ";"
//! type   ::= path ( "<" type ">" )?
//! path   ::= IDENT ( "::" IDENT )*
//! ```
//!
//! The whole input is split into statements before any of them is acted
//! upon, so a malformed statement is reported even if an earlier statement
//! would fail resolution.

use crate::error::ParseError;
use crate::lexer::{Token, TokenKind, line_text};
use std::fmt;

/// Keyword opening a definition.
pub const DEF_KEYWORD: &str = "DEF_CONFIG";

/// A type expression as written in a field declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// A possibly qualified name (`u32`, `std::string`, `device`, `A::B`).
    Named(String),
    /// A generic instantiation (`std::vector<device>`).
    Generic {
        /// Generic base path.
        base: String,
        /// Type argument.
        arg: Box<TypeExpr>,
    },
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Generic { base, arg } => write!(f, "{base}<{arg}>"),
        }
    }
}

/// Statement shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementKind {
    /// `DEF_CONFIG NAME {`
    Open {
        /// Definition name.
        name: String,
    },
    /// `};`
    Close,
    /// `TYPE NAME;`
    Field {
        /// Declared type.
        ty: TypeExpr,
        /// Field name.
        name: String,
    },
}

/// A statement with the line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Statement shape.
    pub kind: StatementKind,
    /// Starting line (1-based).
    pub line: usize,
}

/// Recursive-descent parser over a token stream.
pub struct StatementParser<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'a> StatementParser<'a> {
    /// Creates a parser. `source` is the normalized text the tokens came
    /// from and is only used to quote lines in diagnostics.
    #[must_use]
    pub fn new(source: &'a str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
        }
    }

    /// Parses every statement up to end of input.
    ///
    /// # Errors
    /// Returns `ParseError::UnrecognizedLine` for the first statement that
    /// matches none of the shapes.
    pub fn parse_all(mut self) -> Result<Vec<Statement>, ParseError> {
        let mut statements = Vec::new();
        while self.peek().kind != TokenKind::Eof {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        let line = self.peek().line;
        let kind = match self.peek().kind.clone() {
            TokenKind::Ident(word) if word == DEF_KEYWORD => {
                self.bump();
                let name = self.expect_ident(line)?;
                self.expect(TokenKind::LBrace, line)?;
                StatementKind::Open { name }
            }
            TokenKind::RBrace => {
                self.bump();
                self.expect(TokenKind::Semicolon, line)?;
                StatementKind::Close
            }
            TokenKind::Ident(_) => {
                let ty = self.parse_type(line)?;
                let name = self.expect_ident(line)?;
                self.expect(TokenKind::Semicolon, line)?;
                StatementKind::Field { ty, name }
            }
            _ => return Err(self.unrecognized(line)),
        };
        Ok(Statement { kind, line })
    }

    fn parse_type(&mut self, line: usize) -> Result<TypeExpr, ParseError> {
        let base = self.parse_path(line)?;
        if self.peek().kind != TokenKind::LAngle {
            return Ok(TypeExpr::Named(base));
        }
        self.bump();
        let arg = self.parse_type(line)?;
        self.expect(TokenKind::RAngle, line)?;
        Ok(TypeExpr::Generic {
            base,
            arg: Box::new(arg),
        })
    }

    fn parse_path(&mut self, line: usize) -> Result<String, ParseError> {
        let mut path = self.expect_ident(line)?;
        while self.peek().kind == TokenKind::PathSep {
            self.bump();
            path.push_str("::");
            path.push_str(&self.expect_ident(line)?);
        }
        Ok(path)
    }

    fn expect_ident(&mut self, line: usize) -> Result<String, ParseError> {
        match self.peek().ident() {
            Some(name) if name != DEF_KEYWORD => {
                let name = name.to_string();
                self.bump();
                Ok(name)
            }
            _ => Err(self.unrecognized(line)),
        }
    }

    fn expect(&mut self, kind: TokenKind, line: usize) -> Result<(), ParseError> {
        if self.peek().kind != kind {
            return Err(self.unrecognized(line));
        }
        self.bump();
        Ok(())
    }

    fn peek(&self) -> &Token {
        // The tokenizer always terminates the stream with `Eof`.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn bump(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn unrecognized(&self, line: usize) -> ParseError {
        ParseError::unrecognized(line, line_text(self.source, line))
    }
}
