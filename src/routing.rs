//! Wallet routes
//!
//! Maps wallet names to slugs and back, resolves previous/next neighbours
//! on detail pages, and builds page metadata.

use crate::types::WalletRecord;
use serde::Serialize;

/// Title used when a slug does not match any wallet
pub const NOT_FOUND_TITLE: &str = "Wallet Not Found";

/// URL-style identifier: lowercase, whitespace runs become `-`
pub fn slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Find the catalog index for a slug (hyphens read as spaces, any case)
pub fn resolve(records: &[WalletRecord], slug: &str) -> Option<usize> {
    let wanted = slug.replace('-', " ").to_lowercase();
    records.iter().position(|w| w.name.to_lowercase() == wanted)
}

/// Catalog index of an exact wallet name
pub fn position(records: &[WalletRecord], name: &str) -> Option<usize> {
    records.iter().position(|w| w.name == name)
}

/// Neighbours of a wallet in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacent {
    pub previous: Option<usize>,
    pub next: Option<usize>,
}

/// Previous/next wallets for `name`; `None` if the name is unknown
pub fn adjacent(records: &[WalletRecord], name: &str) -> Option<Adjacent> {
    let index = position(records, name)?;
    Some(Adjacent {
        previous: index.checked_sub(1),
        next: Some(index + 1).filter(|&i| i < records.len()),
    })
}

/// Page title and description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub fn metadata(wallet: Option<&WalletRecord>) -> PageMeta {
    match wallet {
        Some(w) => PageMeta {
            title: format!("{} - Web3UX Analysis", w.name),
            description: Some(format!(
                "Detailed UX analysis of {} wallet including onboarding, UI design, and user experience evaluation.",
                w.name
            )),
        },
        None => PageMeta {
            title: NOT_FOUND_TITLE.to_string(),
            description: None,
        },
    }
}

/// One statically known detail page
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    pub slug: String,
    #[serde(flatten)]
    pub meta: PageMeta,
}

/// Every detail page, in catalog order
pub fn static_routes(records: &[WalletRecord]) -> Vec<Route> {
    records
        .iter()
        .map(|w| Route {
            slug: slug(&w.name),
            meta: metadata(Some(w)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::record;

    fn xyz() -> Vec<WalletRecord> {
        vec![record("X", 1, 1, 0), record("Y", 2, 2, 0), record("Z", 3, 3, 0)]
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Trust Wallet"), "trust-wallet");
        assert_eq!(slug("Coinbase  Smart\tWallet"), "coinbase-smart-wallet");
        assert_eq!(slug("1inch"), "1inch");
    }

    #[test]
    fn test_resolve() {
        let records = vec![record("MetaMask", 3, 3, 6), record("Trust Wallet", 4, 3, 3)];
        assert_eq!(resolve(&records, "trust-wallet"), Some(1));
        assert_eq!(resolve(&records, "METAMASK"), Some(0));
        assert_eq!(resolve(&records, "phantom"), None);

        for (i, w) in records.iter().enumerate() {
            assert_eq!(resolve(&records, &slug(&w.name)), Some(i));
        }
    }

    #[test]
    fn test_adjacent_middle() {
        let records = xyz();
        assert_eq!(
            adjacent(&records, "Y"),
            Some(Adjacent { previous: Some(0), next: Some(2) })
        );
    }

    #[test]
    fn test_adjacent_ends() {
        let records = xyz();
        assert_eq!(
            adjacent(&records, "Z"),
            Some(Adjacent { previous: Some(1), next: None })
        );
        assert_eq!(
            adjacent(&records, "X"),
            Some(Adjacent { previous: None, next: Some(1) })
        );
    }

    #[test]
    fn test_adjacent_is_case_sensitive() {
        let records = xyz();
        assert_eq!(adjacent(&records, "y"), None);
    }

    #[test]
    fn test_metadata() {
        let wallet = record("Rainbow", 5, 5, 1);
        let meta = metadata(Some(&wallet));
        assert_eq!(meta.title, "Rainbow - Web3UX Analysis");
        assert!(meta.description.unwrap().starts_with("Detailed UX analysis of Rainbow wallet"));
        assert_eq!(metadata(None).title, NOT_FOUND_TITLE);
    }

    #[test]
    fn test_static_routes_json() {
        let routes = static_routes(&[record("Trust Wallet", 4, 3, 3)]);
        let json = serde_json::to_value(&routes).unwrap();
        assert_eq!(json[0]["slug"], "trust-wallet");
        assert_eq!(json[0]["title"], "Trust Wallet - Web3UX Analysis");
    }
}
