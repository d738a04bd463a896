//! Prelude module for convenient imports.
//!
//! ```
//! use ironcfg::prelude::*;
//! ```

// Runtime types
pub use ironcfg_core::{ConvertError, DocumentError, LoadError, XmlDocument, XmlNode};

// Schema types
pub use ironcfg_schema::{Forest, ParseError, TypeGraph, parse_schema, parse_schema_file};

// Codegen types
pub use ironcfg_codegen::{
    CodegenError, Generator, GeneratorOptions, generate_from_file, generate_from_str,
    generate_to_file,
};
