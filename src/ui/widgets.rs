//! Reusable UI widgets
//!
//! Contains common UI components used across pages:
//! - Popup dialogs (help, error)
//! - Flash messages and the status bar
//! - Layout helpers for the card grid and overlays

use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a centered popup dialog
pub fn render_popup(
    frame: &mut Frame,
    title: &str,
    content: Vec<Line>,
    buttons: &[(&str, char)], // (label, key)
    theme: &Theme,
    area: Rect,
) {
    if area.is_empty() {
        return;
    }

    let popup_width = area.width.saturating_sub(4).min(64);
    let popup_height = (content.len() as u16 + 6).min(area.height.saturating_sub(2));

    let popup_area = centered_rect(popup_width, popup_height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused())
        .style(theme.text());

    frame.render_widget(block, popup_area);

    let inner = Rect {
        x: popup_area.x + 2,
        y: popup_area.y + 1,
        width: popup_area.width.saturating_sub(4),
        height: popup_area.height.saturating_sub(4),
    };

    let content_widget = Paragraph::new(content)
        .style(theme.text())
        .wrap(Wrap { trim: false });
    frame.render_widget(content_widget, inner);

    if !buttons.is_empty() && popup_area.height >= 3 {
        let button_area = Rect {
            x: popup_area.x + 2,
            y: popup_area.y + popup_area.height - 2,
            width: popup_area.width.saturating_sub(4),
            height: 1,
        };

        let button_spans: Vec<Span> = buttons
            .iter()
            .enumerate()
            .flat_map(|(i, (label, key))| {
                let mut spans = vec![
                    Span::styled("[", theme.text_dim()),
                    Span::styled(
                        key.to_string(),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("] ", theme.text_dim()),
                    Span::styled(*label, theme.text()),
                ];
                if i < buttons.len() - 1 {
                    spans.push(Span::raw("    "));
                }
                spans
            })
            .collect();

        let buttons_widget = Paragraph::new(Line::from(button_spans))
            .alignment(Alignment::Center);
        frame.render_widget(buttons_widget, button_area);
    }
}

/// Render the keybinding help popup
pub fn render_help_popup(frame: &mut Frame, theme: &Theme, area: Rect) {
    let rows: &[(&str, &str)] = &[
        ("Comparison", ""),
        ("  h/j/k/l", "Move between cards"),
        ("  Enter", "Open wallet details"),
        ("  /", "Search wallets or features"),
        ("  s / S", "Next / previous sort order"),
        ("  c", "Cycle grid columns"),
        ("Details", ""),
        ("  [ / ]", "Previous / next wallet"),
        ("  j/k", "Scroll"),
        ("  h/l, Enter", "Pick and open a screenshot"),
        ("  1-9", "Open screenshot directly"),
        ("  Esc", "Back to comparison"),
        ("Screenshot viewer", ""),
        ("  ← / →", "Previous / next screenshot"),
        ("  Esc", "Close viewer"),
        ("Anywhere", ""),
        ("  t", "Cycle theme"),
        ("  q", "Quit"),
    ];

    let content: Vec<Line> = rows
        .iter()
        .map(|(keys, action)| {
            if action.is_empty() {
                Line::styled(*keys, theme.title())
            } else {
                Line::from(vec![
                    Span::styled(format!("{:<14}", keys), theme.text()),
                    Span::styled(*action, theme.text_dim()),
                ])
            }
        })
        .collect();

    render_popup(frame, "Keybindings", content, &[("Close", '?')], theme, area);
}

/// Render an error popup
pub fn render_error_popup(
    frame: &mut Frame,
    title: &str,
    message: &str,
    theme: &Theme,
    area: Rect,
) {
    let content = vec![
        Line::raw(""),
        Line::styled(message, theme.error()),
        Line::raw(""),
    ];

    render_popup(frame, title, content, &[("OK", 'o')], theme, area);
}

/// Render a flash message (bottom of screen)
pub fn render_flash_message(
    frame: &mut Frame,
    message: &str,
    is_error: bool,
    theme: &Theme,
    area: Rect,
) {
    let style = if is_error { theme.error() } else { theme.success() };
    let prefix = if is_error { "✗ " } else { "✓ " };

    if area.is_empty() {
        return;
    }

    let flash_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: area.height.min(1),
    };

    frame.render_widget(Clear, flash_area);
    let flash = Paragraph::new(Line::from(vec![
        Span::styled(prefix, style),
        Span::styled(message, style),
    ]));

    frame.render_widget(flash, flash_area);
}

/// Render status bar at bottom
pub fn render_status_bar(
    frame: &mut Frame,
    left_content: &str,
    right_content: &str,
    theme: &Theme,
    area: Rect,
) {
    // Squeezed out on very short terminals
    if area.is_empty() {
        return;
    }

    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: area.height.min(1),
    };

    frame.render_widget(Clear, status_area);

    let left_widget = Paragraph::new(left_content).style(theme.text_dim());

    let right_len = right_content.chars().count() as u16;
    let right_area = Rect {
        x: status_area.x + status_area.width.saturating_sub(right_len + 1),
        y: status_area.y,
        width: (right_len + 1).min(status_area.width),
        height: 1,
    };
    let right_widget = Paragraph::new(right_content).style(theme.text_dim());

    frame.render_widget(left_widget, status_area);
    frame.render_widget(right_widget, right_area);
}

/// Helper: Create a centered rect of given size
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Helper: Split `area` into `rows` x `columns` cells of fixed height,
/// row by row
pub fn grid_cells(area: Rect, columns: usize, rows: usize, cell_height: u16) -> Vec<Rect> {
    let columns = columns.max(1);
    let row_constraints = vec![Constraint::Length(cell_height); rows];
    let col_constraints = vec![Constraint::Ratio(1, columns as u32); columns];

    let row_areas = Layout::vertical(row_constraints)
        .flex(Flex::Start)
        .split(area);

    row_areas
        .iter()
        .flat_map(|row| Layout::horizontal(col_constraints.clone()).split(*row).to_vec())
        .collect()
}
