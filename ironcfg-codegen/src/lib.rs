//! # IronCfg Codegen
//!
//! Rust loader generation from `DEF_CONFIG` schemas.
//!
//! This crate provides:
//! - One record struct and one loader function per distinct schema type
//! - File-level entry points per root definition
//! - Build script integration through [`generate_to_file`]
//!
//! # Build script usage
//!
//! ```no_run
//! // build.rs
//! let out_dir = std::env::var("OUT_DIR").unwrap();
//! ironcfg_codegen::generate_to_file(
//!     "schemas/app_config.h",
//!     std::path::Path::new(&out_dir).join("app_config.rs"),
//! )
//! .unwrap();
//! ```

pub mod error;
pub mod generator;
pub mod rust;

pub use error::CodegenError;
pub use generator::{DEFAULT_RUNTIME_PATH, Generator, GeneratorOptions};

use std::path::Path;

/// Generates Rust code from schema text with default options.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_str(schema: &str) -> Result<String, CodegenError> {
    generate_with_options(schema, GeneratorOptions::default())
}

/// Generates Rust code from schema text.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_with_options(
    schema: &str,
    options: GeneratorOptions,
) -> Result<String, CodegenError> {
    let forest = ironcfg_schema::parse_schema(schema)?;
    let graph = ironcfg_schema::TypeGraph::from_forest(&forest);
    Generator::with_options(&forest, &graph, options).generate()
}

/// Generates Rust code from a schema file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(path: &Path) -> Result<String, CodegenError> {
    let schema = std::fs::read_to_string(path)?;
    generate_from_str(&schema)
}

/// Compiles the schema at `input` and writes the generated source to
/// `output`. Nothing is written unless compilation succeeds.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, generation, or writing fails.
pub fn generate_to_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<(), CodegenError> {
    generate_to_file_with_options(input, output, GeneratorOptions::default())
}

/// Same as [`generate_to_file`] with explicit generator options.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, generation, or writing fails.
pub fn generate_to_file_with_options(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: GeneratorOptions,
) -> Result<(), CodegenError> {
    let input = input.as_ref();
    let output = output.as_ref();

    tracing::info!(input = %input.display(), "compiling schema");
    let schema = std::fs::read_to_string(input)?;
    let code = generate_with_options(&schema, options)?;
    std::fs::write(output, code)?;
    tracing::info!(output = %output.display(), "wrote generated loaders");

    Ok(())
}
