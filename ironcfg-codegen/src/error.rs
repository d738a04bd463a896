//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] ironcfg_schema::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Two distinct types map to the same Rust identifier.
    #[error("generated name '{ident}' is used by both '{first}' and '{second}'")]
    NameCollision {
        /// Colliding Rust identifier.
        ident: String,
        /// Qualified name of the first owner.
        first: String,
        /// Qualified name of the second owner.
        second: String,
    },

    /// A schema name cannot be used as a Rust identifier.
    #[error("'{name}' cannot be used as a Rust identifier: {reason}")]
    InvalidIdentifier {
        /// Offending name.
        name: String,
        /// Why it is rejected.
        reason: String,
    },
}

impl CodegenError {
    /// Creates an invalid identifier error.
    pub fn invalid_identifier(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
