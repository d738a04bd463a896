//! # IronCfg Demo
//!
//! Loads a logging configuration through loaders generated at build time
//! from `schemas/log_config.h`.

/// Records and loaders generated from `schemas/log_config.h`.
pub mod log_config {
    // the included file is generated in build.rs
    include!(concat!(env!("OUT_DIR"), "/log_config.rs"));
}

pub use log_config::{category, category__device, log_conf};

use std::path::{Path, PathBuf};

/// Path of the sample configuration shipped with this crate.
#[must_use]
pub fn sample_config_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("config/log_conf.xml")
}

/// Total number of devices (main plus backups) across all categories.
#[must_use]
pub fn device_count(conf: &log_conf) -> usize {
    conf.categories
        .iter()
        .map(|category| 1 + category.backup_devs.len())
        .sum()
}
