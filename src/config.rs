//! Configuration management for walletux
//!
//! Handles loading, saving, and default configuration values.
//! Config file location: ~/.config/walletux/config.toml

use crate::types::SortKey;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeName,
    pub columns: GridColumns,
    pub default_sort: SortKey,
    /// Catalog file replacing the built-in reviews
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    pub display: DisplayOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeName::Gruvbox,
            columns: GridColumns::Auto,
            default_sort: SortKey::Overall,
            catalog: None,
            display: DisplayOptions::default(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("walletux");
        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file, or create default if not exists
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            let config = Config::default();
            config.save()?;
            tracing::info!(path = ?path, "created default config");
            return Ok(config);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config from {:?}", path))
    }

    fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        tracing::debug!(path = ?path, "saved config");
        Ok(())
    }
}

/// Available theme names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Gruvbox,
    Nord,
    Transparent,
}

impl ThemeName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Gruvbox => "Gruvbox",
            ThemeName::Nord => "Nord",
            ThemeName::Transparent => "Transparent",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ThemeName::Gruvbox => ThemeName::Nord,
            ThemeName::Nord => ThemeName::Transparent,
            ThemeName::Transparent => ThemeName::Gruvbox,
        }
    }
}

/// Number of card columns in the comparison grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GridColumns {
    #[default]
    Auto,
    One,
    Two,
    Three,
}

impl GridColumns {
    pub fn as_str(&self) -> &'static str {
        match self {
            GridColumns::Auto => "Auto (responsive)",
            GridColumns::One => "1 column",
            GridColumns::Two => "2 columns",
            GridColumns::Three => "3 columns",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            GridColumns::Auto => GridColumns::One,
            GridColumns::One => GridColumns::Two,
            GridColumns::Two => GridColumns::Three,
            GridColumns::Three => GridColumns::Auto,
        }
    }

    /// Resolve to a concrete column count for a terminal width
    pub fn count(&self, width: u16) -> usize {
        match self {
            GridColumns::One => 1,
            GridColumns::Two => 2,
            GridColumns::Three => 3,
            GridColumns::Auto if width >= 120 => 3,
            GridColumns::Auto if width >= 80 => 2,
            GridColumns::Auto => 1,
        }
    }
}

/// Display options for the comparison grid
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    pub show_hero: bool,
    pub feature_badges: usize,
    pub badge_width: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_hero: true,
            feature_badges: 2,
            badge_width: 20,
        }
    }
}
