use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

const SCHEMA: &str = "schemas/log_config.h";

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed={SCHEMA}");

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").context("OUT_DIR is not set")?);
    ironcfg_codegen::generate_to_file(SCHEMA, out_dir.join("log_config.rs"))
        .with_context(|| format!("failed to compile {SCHEMA}"))?;

    Ok(())
}
