//! Catalog files
//!
//! A catalog file holds a `wallets` array, in TOML (`[[wallets]]`) or JSON.
//! The format is picked by file extension; anything other than `.json` is
//! read as TOML.

use super::Catalog;
use crate::types::WalletRecord;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    wallets: Vec<WalletRecord>,
}

/// Load and validate a catalog file
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog from {:?}", path))?;

    let file = parse_catalog(&content, is_json(path))
        .with_context(|| format!("Failed to parse catalog from {:?}", path))?;

    tracing::info!(path = ?path, wallets = file.wallets.len(), "loaded catalog file");

    Catalog::new(file.wallets).with_context(|| format!("Invalid catalog {:?}", path))
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

fn parse_catalog(content: &str, json: bool) -> Result<CatalogFile> {
    if json {
        Ok(serde_json::from_str(content)?)
    } else {
        Ok(toml::from_str(content)?)
    }
}
