//! CLI command implementations

pub mod config;
pub mod demo;
pub mod run;

use std::path::PathBuf;

use anyhow::{Context, Result};
use bankline_core::BankContext;

/// Environment variable overriding the bankline directory
const DIR_ENV: &str = "BANKLINE_DIR";

/// Get the bankline directory from environment or default
pub fn get_bankline_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().context("Could not find home directory")?;
    Ok(home.join(".bankline"))
}

/// Build a context from the configured directory
///
/// Nothing is created on disk: a missing directory just means defaults.
pub fn get_context() -> Result<BankContext> {
    let bankline_dir = get_bankline_dir()?;
    tracing::debug!(dir = ?bankline_dir, "loading configuration");
    BankContext::load(&bankline_dir)
        .with_context(|| format!("Failed to load configuration from {:?}", bankline_dir))
}
