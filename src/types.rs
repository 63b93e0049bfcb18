//! Core data types for walletux
//!
//! This module defines the review records shared by every page, plus the
//! score helpers that both the comparison grid and the detail page use.

use serde::{Deserialize, Serialize};

/// A reviewed cryptocurrency wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletRecord {
    pub name: String,
    pub onboarding: u8,
    pub ui_design: u8,
    pub ux_issues: u32,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub good: Vec<String>,
    #[serde(default)]
    pub ux_issues_list: Vec<String>,
    #[serde(default)]
    pub unique_features: Vec<String>,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub screenshots: Vec<GalleryImage>,
}

impl WalletRecord {
    /// Combined score used by the "overall" sort: (onboarding + design) - issues
    pub fn overall_score(&self) -> i64 {
        i64::from(self.onboarding) + i64::from(self.ui_design) - i64::from(self.ux_issues)
    }

    /// Star rating shown on cards and in the detail header
    pub fn display_score(&self) -> f64 {
        display_score(self.onboarding, self.ui_design, self.ux_issues)
    }

    /// Star rating formatted with one decimal
    pub fn formatted_score(&self) -> String {
        format!("{:.1}", self.display_score())
    }

    /// Features shown as badges on a grid card
    pub fn badges(&self, count: usize, width: usize) -> Vec<String> {
        self.unique_features
            .iter()
            .take(count)
            .map(|f| truncate_feature(f, width))
            .collect()
    }
}

/// One screenshot in a wallet's gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Sort order for the comparison grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Overall,
    Onboarding,
    Design,
    Ux,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        &[SortKey::Overall, SortKey::Onboarding, SortKey::Design, SortKey::Ux]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Overall => "Overall Score",
            SortKey::Onboarding => "Onboarding",
            SortKey::Design => "UI Design",
            SortKey::Ux => "UX Issues (fewer is better)",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Overall => "overall",
            SortKey::Onboarding => "onboarding",
            SortKey::Design => "design",
            SortKey::Ux => "ux",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
    }

    pub fn next(&self) -> Self {
        match self {
            SortKey::Overall => SortKey::Onboarding,
            SortKey::Onboarding => SortKey::Design,
            SortKey::Design => SortKey::Ux,
            SortKey::Ux => SortKey::Overall,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            SortKey::Overall => SortKey::Ux,
            SortKey::Onboarding => SortKey::Overall,
            SortKey::Design => SortKey::Onboarding,
            SortKey::Ux => SortKey::Design,
        }
    }
}

/// Color band for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreGrade {
    Good,
    Fair,
    Poor,
    Neutral,
}

impl ScoreGrade {
    /// Grade a 0-5 rating (also used for the star score)
    pub fn rating(score: f64) -> Self {
        if score >= 4.5 {
            ScoreGrade::Good
        } else if score >= 3.5 {
            ScoreGrade::Fair
        } else {
            ScoreGrade::Poor
        }
    }

    /// Grade an issue count as shown on the detail page
    pub fn detail_issues(count: u32) -> Self {
        if count == 0 {
            ScoreGrade::Neutral
        } else {
            ScoreGrade::Poor
        }
    }
}

// Helper functions

/// `round1((onboarding + ui_design - ux_issues / 2) / 2)`
pub fn display_score(onboarding: u8, ui_design: u8, ux_issues: u32) -> f64 {
    let raw = (f64::from(onboarding) + f64::from(ui_design) - f64::from(ux_issues) / 2.0) / 2.0;
    round1(raw)
}

/// Round half away from zero to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Cut a feature name to `width` characters, appending "..." when cut
pub fn truncate_feature(feature: &str, width: usize) -> String {
    if feature.chars().count() > width {
        let head: String = feature.chars().take(width).collect();
        format!("{}...", head)
    } else {
        feature.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet(onboarding: u8, ui_design: u8, ux_issues: u32) -> WalletRecord {
        WalletRecord {
            name: "Test".into(),
            onboarding,
            ui_design,
            ux_issues,
            notes: String::new(),
            good: vec![],
            ux_issues_list: vec![],
            unique_features: vec![
                "Built-in swap aggregator".into(),
                "NFTs".into(),
                "Hardware support".into(),
            ],
            icon: String::new(),
            screenshots: vec![],
        }
    }

    #[test]
    fn test_display_score() {
        assert_eq!(wallet(5, 5, 0).display_score(), 5.0);
        assert_eq!(wallet(4, 3, 3).display_score(), 2.8);
        assert_eq!(wallet(4, 4, 1).formatted_score(), "3.8");
        assert_eq!(wallet(0, 0, 3).formatted_score(), "-0.8");
    }

    #[test]
    fn test_overall_score() {
        assert_eq!(wallet(5, 5, 0).overall_score(), 10);
        assert_eq!(wallet(3, 3, 2).overall_score(), 4);
        assert_eq!(wallet(1, 0, 7).overall_score(), -6);
    }

    #[test]
    fn test_badges() {
        let badges = wallet(3, 3, 0).badges(2, 20);
        assert_eq!(badges, vec!["Built-in swap aggreg...".to_string(), "NFTs".to_string()]);
    }

    #[test]
    fn test_truncate_feature_multibyte() {
        assert_eq!(truncate_feature("ééé", 2), "éé...");
        assert_eq!(truncate_feature("ééé", 3), "ééé");
    }

    #[test]
    fn test_sort_key_cycle() {
        let key = SortKey::Overall;
        assert_eq!(key.next().next().next().next(), SortKey::Overall);
        assert_eq!(key.previous(), SortKey::Ux);
        assert_eq!(SortKey::parse("DESIGN"), Some(SortKey::Design));
        assert_eq!(SortKey::parse("stars"), None);
    }

    #[test]
    fn test_score_grades() {
        assert_eq!(ScoreGrade::rating(4.5), ScoreGrade::Good);
        assert_eq!(ScoreGrade::rating(3.5), ScoreGrade::Fair);
        assert_eq!(ScoreGrade::rating(3.4), ScoreGrade::Poor);
        assert_eq!(ScoreGrade::detail_issues(0), ScoreGrade::Neutral);
        assert_eq!(ScoreGrade::detail_issues(1), ScoreGrade::Poor);
    }
}
