//! Theme definitions for walletux
//!
//! Provides three built-in themes: Gruvbox, Nord, and Transparent.
//! Each theme defines colors for all UI elements.

use crate::config::ThemeName;
use crate::types::ScoreGrade;
use ratatui::style::{Color, Modifier, Style};

/// Complete theme with all required colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,

    // Accent colors
    pub accent: Color,
    pub accent_dim: Color,

    // Status colors
    pub success: Color,
    pub error: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub badge_bg: Color,

    // Score colors
    pub score_good: Color,
    pub score_fair: Color,
    pub score_poor: Color,
    pub star: Color,
}

impl Theme {
    /// Create a theme from a theme name
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Gruvbox => Self::gruvbox(),
            ThemeName::Nord => Self::nord(),
            ThemeName::Transparent => Self::transparent(),
        }
    }

    /// Gruvbox dark theme (default)
    pub fn gruvbox() -> Self {
        Self {
            bg: Color::Rgb(40, 40, 40),           // #282828
            fg: Color::Rgb(235, 219, 178),        // #ebdbb2
            fg_dim: Color::Rgb(146, 131, 116),    // #928374

            accent: Color::Rgb(254, 128, 25),     // #fe8019
            accent_dim: Color::Rgb(214, 93, 14),  // #d65d0e

            success: Color::Rgb(184, 187, 38),    // #b8bb26
            error: Color::Rgb(251, 73, 52),       // #fb4934

            border: Color::Rgb(80, 73, 69),       // #504945
            border_focused: Color::Rgb(168, 153, 132), // #a89984
            selection_bg: Color::Rgb(60, 56, 54), // #3c3836
            selection_fg: Color::Rgb(251, 241, 199), // #fbf1c7
            badge_bg: Color::Rgb(80, 73, 69),

            score_good: Color::Rgb(184, 187, 38),
            score_fair: Color::Rgb(250, 189, 47),
            score_poor: Color::Rgb(251, 73, 52),
            star: Color::Rgb(250, 189, 47),
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            // Polar Night
            bg: Color::Rgb(46, 52, 64),           // #2e3440
            fg: Color::Rgb(236, 239, 244),        // #eceff4
            fg_dim: Color::Rgb(76, 86, 106),      // #4c566a

            // Frost
            accent: Color::Rgb(136, 192, 208),    // #88c0d0
            accent_dim: Color::Rgb(94, 129, 172), // #5e81ac

            // Aurora
            success: Color::Rgb(163, 190, 140),   // #a3be8c
            error: Color::Rgb(191, 97, 106),      // #bf616a

            border: Color::Rgb(59, 66, 82),       // #3b4252
            border_focused: Color::Rgb(136, 192, 208),
            selection_bg: Color::Rgb(67, 76, 94), // #434c5e
            selection_fg: Color::Rgb(236, 239, 244),
            badge_bg: Color::Rgb(59, 66, 82),

            score_good: Color::Rgb(163, 190, 140),
            score_fair: Color::Rgb(235, 203, 139),
            score_poor: Color::Rgb(191, 97, 106),
            star: Color::Rgb(235, 203, 139),
        }
    }

    /// Transparent theme (uses terminal colors)
    pub fn transparent() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::Reset,
            fg_dim: Color::DarkGray,

            accent: Color::Cyan,
            accent_dim: Color::Blue,

            success: Color::Green,
            error: Color::Red,

            border: Color::DarkGray,
            border_focused: Color::Cyan,
            selection_bg: Color::DarkGray,
            selection_fg: Color::White,
            badge_bg: Color::DarkGray,

            score_good: Color::Green,
            score_fair: Color::Yellow,
            score_poor: Color::Red,
            star: Color::Yellow,
        }
    }

    // Style helpers for common UI patterns

    /// Background for blocks and panels
    pub fn block_style(&self) -> Style {
        Style::default().bg(self.bg)
    }

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Dimmed text style
    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Title/header style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected card style
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style (unfocused)
    pub fn border(&self) -> Style {
        Style::default().fg(self.border).bg(self.bg)
    }

    /// Border style (focused)
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused).bg(self.bg)
    }

    /// Feature badge on a card
    pub fn badge(&self) -> Style {
        Style::default().fg(self.fg).bg(self.badge_bg)
    }

    /// Link to another page
    pub fn link(&self) -> Style {
        Style::default()
            .fg(self.accent_dim)
            .bg(self.bg)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Success message style
    pub fn success(&self) -> Style {
        Style::default().fg(self.success).bg(self.bg)
    }

    /// Error message style
    pub fn error(&self) -> Style {
        Style::default().fg(self.error).bg(self.bg)
    }

    /// Star rating
    pub fn star(&self) -> Style {
        Style::default().fg(self.star).bg(self.bg)
    }

    /// Score colored by its grade
    pub fn grade(&self, grade: ScoreGrade) -> Style {
        let color = match grade {
            ScoreGrade::Good => self.score_good,
            ScoreGrade::Fair => self.score_fair,
            ScoreGrade::Poor => self.score_poor,
            ScoreGrade::Neutral => self.fg,
        };
        Style::default()
            .fg(color)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_name() {
        let gruvbox = Theme::from_name(ThemeName::Gruvbox);
        assert_eq!(gruvbox.bg, Color::Rgb(40, 40, 40));

        let nord = Theme::from_name(ThemeName::Nord);
        assert_eq!(nord.bg, Color::Rgb(46, 52, 64));

        let transparent = Theme::from_name(ThemeName::Transparent);
        assert_eq!(transparent.bg, Color::Reset);
    }

    #[test]
    fn test_grade_colors() {
        let theme = Theme::transparent();
        assert_eq!(theme.grade(ScoreGrade::Good).fg, Some(Color::Green));
        assert_eq!(theme.grade(ScoreGrade::Poor).fg, Some(Color::Red));
        assert_eq!(theme.grade(ScoreGrade::Neutral).fg, Some(Color::Reset));
    }
}
