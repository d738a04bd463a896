//! Loads a logging configuration file and prints a summary.
//!
//! Usage: `ironcfg-demo [config.xml]`, defaulting to the bundled sample.

use anyhow::Context;
use ironcfg_demo::log_config::load_log_conf_from_xml_file;
use ironcfg_demo::{device_count, sample_config_path};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(sample_config_path);

    let conf = load_log_conf_from_xml_file(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        magic = conf.magic,
        categories = conf.categories.len(),
        devices = device_count(&conf),
        "configuration loaded"
    );

    for category in &conf.categories {
        println!(
            "{} (level {}, max size {}): main device '{}' with {} backup(s)",
            category.name,
            category.level,
            category.max_size,
            category.main_dev.r#type,
            category.backup_devs.len()
        );
    }

    Ok(())
}
