//! Wallet catalog
//!
//! Supplies the ordered list of reviewed wallets. The order of the list is
//! the canonical previous/next order on detail pages.
//!
//! Sources:
//! - the built-in review set compiled into the binary
//! - a TOML or JSON catalog file (`--catalog` or `catalog` in config)

mod builtin;
mod file;

pub use file::load_catalog;

use crate::routing;
use crate::types::WalletRecord;
use anyhow::{bail, Result};
use std::collections::HashSet;

/// Immutable, ordered set of wallet reviews
#[derive(Debug, Clone)]
pub struct Catalog {
    wallets: Vec<WalletRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting names that share a slug and out-of-range
    /// scores
    pub fn new(wallets: Vec<WalletRecord>) -> Result<Self> {
        validate(&wallets)?;
        Ok(Self { wallets })
    }

    /// The review set shipped with walletux
    pub fn builtin() -> Self {
        Self {
            wallets: builtin::wallets(),
        }
    }

    pub fn wallets(&self) -> &[WalletRecord] {
        &self.wallets
    }

    pub fn get(&self, index: usize) -> Option<&WalletRecord> {
        self.wallets.get(index)
    }

    pub fn len(&self) -> usize {
        self.wallets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }
}

fn validate(wallets: &[WalletRecord]) -> Result<()> {
    let mut seen = HashSet::new();
    for wallet in wallets {
        if wallet.name.trim().is_empty() {
            bail!("Wallet with empty name");
        }
        if !seen.insert(routing::slug(&wallet.name)) {
            bail!("Duplicate wallet name '{}'", wallet.name);
        }
        if wallet.onboarding > 5 {
            bail!(
                "Wallet '{}': onboarding score {} is outside 0-5",
                wallet.name,
                wallet.onboarding
            );
        }
        if wallet.ui_design > 5 {
            bail!(
                "Wallet '{}': UI design score {} is outside 0-5",
                wallet.name,
                wallet.ui_design
            );
        }
    }
    Ok(())
}
