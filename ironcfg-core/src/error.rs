//! Error types for IronCfg runtime operations.

use thiserror::Error;

/// Error raised when node text cannot be converted to a primitive value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert '{value}' to {kind}")]
pub struct ConvertError {
    /// Offending text.
    pub value: String,
    /// Target primitive kind (`s32`, `u32`, `s64`, `u64`).
    pub kind: &'static str,
}

impl ConvertError {
    /// Creates a conversion error for the given text and target kind.
    pub fn new(value: impl Into<String>, kind: &'static str) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }
}

/// Error type for reading and parsing XML documents.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// XML syntax error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Invalid escape sequence in character data.
    #[error("invalid escape sequence: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document has no root element.
    #[error("document has no root element")]
    NoRootElement,

    /// A second element appeared at the top level.
    #[error("second root element '{name}'")]
    MultipleRoots {
        /// Name of the extra element.
        name: String,
    },

    /// An element was left open at end of input.
    #[error("unclosed element '{name}'")]
    UnclosedElement {
        /// Element name.
        name: String,
    },
}

/// Error type returned by generated loaders.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A required node is absent.
    #[error("node {node} not found")]
    NodeNotFound {
        /// Name of the missing node.
        node: String,
    },

    /// A node is present but its text is malformed.
    #[error("cannot convert node {node}: {source}")]
    ConversionFailed {
        /// Name of the offending node.
        node: String,
        /// Underlying conversion failure.
        source: ConvertError,
    },

    /// The input document could not be read.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),
}

impl LoadError {
    /// Creates a node-not-found error.
    pub fn node_not_found(node: impl Into<String>) -> Self {
        Self::NodeNotFound { node: node.into() }
    }

    /// Creates a conversion error for the given node.
    pub fn conversion(node: impl Into<String>, source: ConvertError) -> Self {
        Self::ConversionFailed {
            node: node.into(),
            source,
        }
    }

    /// Returns true if this error reports a missing node.
    #[must_use]
    pub const fn is_node_not_found(&self) -> bool {
        matches!(self, Self::NodeNotFound { .. })
    }

    /// Returns true if this error reports a malformed value.
    #[must_use]
    pub const fn is_conversion_failed(&self) -> bool {
        matches!(self, Self::ConversionFailed { .. })
    }
}
