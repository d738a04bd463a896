//! Schema parser.
//!
//! Drives the scope state machine over the statements produced by
//! [`StatementParser`], building the definition forest incrementally.
//! Field types are resolved as soon as a field is declared, against the
//! part of the forest built so far.

use crate::error::ParseError;
use crate::lexer::{Tokenizer, line_text};
use crate::normalize::normalize;
use crate::resolver::Resolver;
use crate::syntax::{Statement, StatementKind, StatementParser, TypeExpr};
use crate::types::{DefId, Field, FieldType, Forest};
use std::path::Path;

/// Parses schema source text into a definition forest.
///
/// # Arguments
/// * `source` - Raw schema text (comments and preprocessor lines allowed)
///
/// # Returns
/// Parsed forest or parse error.
///
/// # Errors
/// Returns `ParseError` on the first malformed statement, scope imbalance,
/// duplicate name or unresolvable type.
pub fn parse_schema(source: &str) -> Result<Forest, ParseError> {
    let normalized = normalize(source);
    let tokens = Tokenizer::new(&normalized).tokenize()?;
    let statements = StatementParser::new(&normalized, tokens).parse_all()?;
    tracing::debug!(statements = statements.len(), "schema tokenized");

    let mut parser = SchemaParser::new(&normalized);
    for statement in statements {
        parser.apply(statement)?;
    }
    parser.finish()
}

/// Reads and parses a schema file.
///
/// # Errors
/// Returns `ParseError::Io` if the file cannot be read, or any error of
/// [`parse_schema`].
pub fn parse_schema_file(path: &Path) -> Result<Forest, ParseError> {
    let source = std::fs::read_to_string(path)?;
    parse_schema(&source)
}

/// Scope state machine.
struct SchemaParser<'a> {
    source: &'a str,
    forest: Forest,
    stack: Vec<DefId>,
}

impl<'a> SchemaParser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            forest: Forest::new(),
            stack: Vec::new(),
        }
    }

    fn apply(&mut self, statement: Statement) -> Result<(), ParseError> {
        let line = statement.line;
        match statement.kind {
            StatementKind::Open { name } => self.open(name, line),
            StatementKind::Close => self.close(line),
            StatementKind::Field { ty, name } => self.field(&ty, name, line),
        }
    }

    fn open(&mut self, name: String, line: usize) -> Result<(), ParseError> {
        let parent = self.stack.last().copied();
        if let Some(existing) = self.forest.find_child(parent, &name) {
            return Err(ParseError::DuplicateDefinition {
                line,
                name: self.forest.get(existing).qualified_name.clone(),
            });
        }

        let id = self.forest.add_definition(parent, name, line);
        tracing::debug!(
            definition = %self.forest.get(id).qualified_name,
            line,
            "definition opened"
        );
        self.stack.push(id);
        Ok(())
    }

    fn close(&mut self, line: usize) -> Result<(), ParseError> {
        self.stack
            .pop()
            .map(|_| ())
            .ok_or_else(|| ParseError::unbalanced(line, "'};' without an open definition"))
    }

    fn field(&mut self, ty: &TypeExpr, name: String, line: usize) -> Result<(), ParseError> {
        let Some(&current) = self.stack.last() else {
            return Err(ParseError::FieldOutsideDefinition {
                line,
                text: line_text(self.source, line).to_string(),
            });
        };

        let owner = self.forest.get(current);
        if owner.field(&name).is_some() {
            return Err(ParseError::DuplicateField {
                line,
                definition: owner.qualified_name.clone(),
                field: name,
            });
        }

        let resolved = Resolver::new(&self.forest).resolve(current, ty, line)?;
        if let FieldType::Record(target) = resolved {
            // Open definitions are `current` and its ancestors; holding one
            // by value would make the record infinitely large.
            if self.stack.contains(&target) {
                return Err(ParseError::RecursiveField {
                    line,
                    definition: owner.qualified_name.clone(),
                    field: name,
                    type_name: self.forest.get(target).qualified_name.clone(),
                });
            }
        }

        self.forest.add_field(
            current,
            Field {
                name,
                ty: resolved,
                line,
            },
        );
        Ok(())
    }

    fn finish(self) -> Result<Forest, ParseError> {
        if let Some(&open) = self.stack.last() {
            let def = self.forest.get(open);
            return Err(ParseError::unbalanced(
                def.line,
                format!("definition '{}' is not closed at end of input", def.qualified_name),
            ));
        }
        tracing::debug!(definitions = self.forest.len(), "schema parsed");
        Ok(self.forest)
    }
}
