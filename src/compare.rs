//! Comparison grid filtering and ordering
//!
//! The view is derived: callers recompute it whenever the query or sort key
//! changes instead of storing it.

use crate::types::{SortKey, WalletRecord};
use std::cmp::Reverse;

/// Filter `records` by `query` and order them by `sort`
///
/// A record matches when its name or any unique feature contains the query,
/// ignoring case. The sort is stable, so ties keep catalog order.
pub fn compute_view<'a>(
    records: &'a [WalletRecord],
    query: &str,
    sort: SortKey,
) -> Vec<&'a WalletRecord> {
    let needle = query.to_lowercase();

    let mut view: Vec<&WalletRecord> = records
        .iter()
        .filter(|w| matches_query(w, &needle))
        .collect();

    match sort {
        SortKey::Overall => view.sort_by_key(|w| Reverse(w.overall_score())),
        SortKey::Onboarding => view.sort_by_key(|w| Reverse(w.onboarding)),
        SortKey::Design => view.sort_by_key(|w| Reverse(w.ui_design)),
        SortKey::Ux => view.sort_by_key(|w| w.ux_issues),
    }

    view
}

/// `needle` must already be lowercase
fn matches_query(wallet: &WalletRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    wallet.name.to_lowercase().contains(needle)
        || wallet
            .unique_features
            .iter()
            .any(|f| f.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::record;

    fn names(view: &[&WalletRecord]) -> Vec<String> {
        view.iter().map(|w| w.name.clone()).collect()
    }

    fn sample() -> Vec<WalletRecord> {
        let mut meta = record("MetaMask", 3, 3, 6);
        meta.unique_features = vec!["Snaps extension system".into()];
        let mut rainbow = record("Rainbow", 5, 5, 1);
        rainbow.unique_features = vec!["Curated NFT gallery".into()];
        let mut zerion = record("Zerion", 4, 5, 0);
        zerion.unique_features = vec!["DeFi position tracking".into()];
        let trust = record("Trust Wallet", 4, 3, 3);
        vec![meta, rainbow, zerion, trust]
    }

    #[test]
    fn test_overall_example() {
        let records = vec![record("A", 5, 5, 0), record("B", 3, 3, 2)];
        let view = compute_view(&records, "", SortKey::Overall);
        assert_eq!(names(&view), vec!["A", "B"]);

        let reversed = vec![record("B", 3, 3, 2), record("A", 5, 5, 0)];
        let view = compute_view(&reversed, "", SortKey::Overall);
        assert_eq!(names(&view), vec!["A", "B"]);
    }

    #[test]
    fn test_case_insensitive_filter() {
        let records = sample();
        let view = compute_view(&records, "META", SortKey::Overall);
        assert_eq!(names(&view), vec!["MetaMask"]);
    }

    #[test]
    fn test_filter_matches_features() {
        let records = sample();
        let view = compute_view(&records, "nft", SortKey::Overall);
        assert_eq!(names(&view), vec!["Rainbow"]);
    }

    #[test]
    fn test_empty_query_passes_all() {
        let records = sample();
        assert_eq!(compute_view(&records, "", SortKey::Ux).len(), records.len());
    }

    #[test]
    fn test_no_match_is_empty() {
        let records = sample();
        assert!(compute_view(&records, "hardware ledger", SortKey::Overall).is_empty());
    }

    #[test]
    fn test_sort_ux_ascending() {
        let records = sample();
        let view = compute_view(&records, "", SortKey::Ux);
        assert_eq!(view[0].ux_issues, 0);
        assert_eq!(names(&view), vec!["Zerion", "Rainbow", "Trust Wallet", "MetaMask"]);
    }

    #[test]
    fn test_sort_descending_keys() {
        let records = sample();
        let view = compute_view(&records, "", SortKey::Onboarding);
        // Zerion and Trust Wallet tie on 4 and keep catalog order
        assert_eq!(names(&view), vec!["Rainbow", "Zerion", "Trust Wallet", "MetaMask"]);

        let view = compute_view(&records, "", SortKey::Design);
        assert_eq!(names(&view), vec!["Rainbow", "Zerion", "MetaMask", "Trust Wallet"]);
    }

    #[test]
    fn test_idempotent() {
        let records = sample();
        for key in SortKey::all() {
            let first = names(&compute_view(&records, "a", *key));
            let second = names(&compute_view(&records, "a", *key));
            assert_eq!(first, second);
        }
    }
}
