//! Error types for schema parsing and resolution.

use thiserror::Error;

/// Error type for schema compilation.
///
/// Every variant is fatal: compilation stops at the first error and no
/// output is produced.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A definition was closed without being opened, or left open at end of input.
    #[error("line {line}: unbalanced scope: {message}")]
    UnbalancedScope {
        /// Line of the offending statement or unclosed definition.
        line: usize,
        /// Description of the imbalance.
        message: String,
    },

    /// A field declaration appeared at top level.
    #[error("line {line}: field declared outside of a definition: '{text}'")]
    FieldOutsideDefinition {
        /// Line of the declaration.
        line: usize,
        /// Source text of the line.
        text: String,
    },

    /// A line matches none of the statement shapes.
    #[error("line {line}: invalid line: '{text}'")]
    UnrecognizedLine {
        /// Line number.
        line: usize,
        /// Source text of the line.
        text: String,
    },

    /// A type name could not be resolved.
    #[error("line {line}: cannot find type: '{type_name}'")]
    UnresolvedType {
        /// Line of the field declaration.
        line: usize,
        /// The type expression as written.
        type_name: String,
    },

    /// Two sibling definitions share a name.
    #[error("line {line}: duplicate definition '{name}'")]
    DuplicateDefinition {
        /// Line of the second definition.
        line: usize,
        /// Qualified name of the definition.
        name: String,
    },

    /// Two fields of one definition share a name.
    #[error("line {line}: duplicate field '{field}' in definition '{definition}'")]
    DuplicateField {
        /// Line of the second declaration.
        line: usize,
        /// Qualified name of the owning definition.
        definition: String,
        /// Field name.
        field: String,
    },

    /// A field would contain its own enclosing definition by value.
    #[error(
        "line {line}: field '{field}' of type '{type_name}' makes '{definition}' contain itself"
    )]
    RecursiveField {
        /// Line of the declaration.
        line: usize,
        /// Qualified name of the owning definition.
        definition: String,
        /// Field name.
        field: String,
        /// Qualified name of the referenced definition.
        type_name: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Creates an unbalanced scope error.
    pub fn unbalanced(line: usize, message: impl Into<String>) -> Self {
        Self::UnbalancedScope {
            line,
            message: message.into(),
        }
    }

    /// Creates an unrecognized line error.
    pub fn unrecognized(line: usize, text: impl Into<String>) -> Self {
        Self::UnrecognizedLine {
            line,
            text: text.into(),
        }
    }

    /// Creates an unresolved type error.
    pub fn unresolved(line: usize, type_name: impl Into<String>) -> Self {
        Self::UnresolvedType {
            line,
            type_name: type_name.into(),
        }
    }

    /// Returns the source line the error refers to, if any.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::UnbalancedScope { line, .. }
            | Self::FieldOutsideDefinition { line, .. }
            | Self::UnrecognizedLine { line, .. }
            | Self::UnresolvedType { line, .. }
            | Self::DuplicateDefinition { line, .. }
            | Self::DuplicateField { line, .. }
            | Self::RecursiveField { line, .. } => Some(*line),
            Self::Io(_) => None,
        }
    }
}
