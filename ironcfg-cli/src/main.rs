//! # ironcfg CLI Entry Point

use clap::Parser;
use ironcfg_cli::CompileArgs;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = CompileArgs::parse();
    ironcfg_cli::run(&args)
}
