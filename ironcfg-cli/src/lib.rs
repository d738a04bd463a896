//! # ironcfg-cli
//!
//! Compiles a `DEF_CONFIG` schema file into a Rust source file of record
//! structs and loaders.
//!
//! ```text
//! ironcfg schemas/app_config.h src/app_config.rs
//! ironcfg --runtime-path ironcfg::core schemas/app_config.h src/app_config.rs
//! ```
//!
//! On failure the diagnostic names the offending line or type, the exit
//! status is non-zero and no output file is written.

use anyhow::Context;
use clap::Parser;
use ironcfg::codegen::{DEFAULT_RUNTIME_PATH, GeneratorOptions, generate_to_file_with_options};
use std::path::PathBuf;

/// Schema compiler for XML configuration loaders.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "ironcfg", version, about)]
pub struct CompileArgs {
    /// Schema file containing DEF_CONFIG definitions.
    pub input: PathBuf,

    /// Rust source file to write.
    pub output: PathBuf,

    /// Path under which the generated code reaches the runtime crate.
    #[arg(long, default_value = DEFAULT_RUNTIME_PATH)]
    pub runtime_path: String,
}

/// Runs one compilation.
///
/// # Errors
/// Returns an error if the schema cannot be read or compiled, or the output
/// cannot be written.
pub fn run(args: &CompileArgs) -> anyhow::Result<()> {
    let options = GeneratorOptions::default().with_runtime_path(args.runtime_path.clone());

    generate_to_file_with_options(&args.input, &args.output, options)
        .with_context(|| format!("failed to compile {}", args.input.display()))?;

    tracing::info!(
        input = %args.input.display(),
        output = %args.output.display(),
        "compilation finished"
    );
    Ok(())
}
