//! File logging
//!
//! The terminal belongs to the TUI, so log output goes to
//! `<cache dir>/walletux/walletux.log`. The filter comes from `WALLETUX_LOG`
//! (same syntax as `RUST_LOG`) and defaults to `info`.

use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const FILTER_ENV: &str = "WALLETUX_LOG";

/// Get the log file path
pub fn path() -> Result<PathBuf> {
    let dir = dirs::cache_dir()
        .context("Could not determine cache directory")?
        .join("walletux");
    Ok(dir.join("walletux.log"))
}

/// Install the global subscriber; returns the log file path
pub fn init() -> Result<PathBuf> {
    let path = path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {:?}", parent))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    let filter = EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(path)
}
