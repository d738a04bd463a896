//! # IronCfg Schema
//!
//! Parser and intermediate representation for `DEF_CONFIG` schemas.
//!
//! This crate provides:
//! - Source normalization (comments and preprocessor lines)
//! - A tokenizer and recursive-descent statement parser
//! - The definition forest, an arena of nested record definitions
//! - Scope-chain type resolution
//! - The deduplicated type graph consumed by code generation

pub mod error;
pub mod ir;
pub mod lexer;
pub mod normalize;
pub mod parser;
pub mod resolver;
pub mod syntax;
pub mod types;

pub use error::ParseError;
pub use ir::{EmitKind, TypeEntry, TypeGraph};
pub use parser::{parse_schema, parse_schema_file};
pub use types::{DefId, Definition, ElementType, Field, FieldType, Forest, PrimitiveKind};
