//! Main rendering module
//!
//! Handles rendering the complete UI including:
//! - Header with the hero line and page title
//! - The mounted page (comparison grid, wallet details, not found)
//! - The screenshot viewer, popups and overlays
//! - Status bar

use crate::app::{App, DetailPage, Page, PopupState};
use crate::gallery::GalleryState;
use crate::routing;
use crate::types::{GalleryImage, ScoreGrade, WalletRecord};
use crate::ui::{theme::Theme, widgets};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Card height including borders
const CARD_HEIGHT: u16 = 8;

/// Main render function - entry point for all UI rendering
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let header_height = if app.config.display.show_hero { 4 } else { 2 };

    let layout = Layout::vertical([
        Constraint::Length(header_height), // Hero + page title
        Constraint::Min(6),                // Page
        Constraint::Length(1),             // Status bar
    ])
    .split(area);

    render_header(frame, app, layout[0]);

    match &app.page {
        Page::Comparison => render_comparison(frame, app, layout[1]),
        Page::Detail(detail) => render_detail(frame, app, detail, layout[1]),
        Page::NotFound { slug } => render_not_found(frame, slug, &app.theme, layout[1]),
    }

    render_status_bar(frame, app, layout[2]);

    render_popups(frame, app, area);
}

/// Render the hero line and current page title
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    if area.is_empty() {
        return;
    }
    let theme = &app.theme;

    let page_title = match &app.page {
        Page::Comparison => "Wallet Comparison".to_string(),
        Page::Detail(_) => routing::metadata(app.current_wallet()).title,
        Page::NotFound { .. } => routing::metadata(None).title,
    };

    let block = Block::default()
        .style(theme.block_style())
        .title(format!(" walletux · {} ", page_title))
        .title_style(theme.title())
        .borders(Borders::BOTTOM)
        .border_style(theme.border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.config.display.show_hero {
        let hero = vec![
            Line::styled("UX reviews", theme.text().add_modifier(Modifier::BOLD)),
            Line::styled("Design analysis of popular crypto projects", theme.text_dim()),
        ];
        let hero_area = Rect {
            x: inner.x + 2,
            width: inner.width.saturating_sub(4),
            ..inner
        };
        frame.render_widget(Paragraph::new(hero), hero_area);
    }
}

/// Render status bar with keybindings
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let hints = match &app.page {
        Page::Comparison if app.search_active => "Type to search  [Enter/Esc] Done",
        Page::Comparison => "[hjkl] Move  [Enter] Details  [/] Search  [s] Sort  [?] Help  [q] Quit",
        Page::Detail(d) if d.gallery.is_open() => "[←/→] Browse  [Esc] Close viewer",
        Page::Detail(_) => "[Esc] Back  [ [/] ] Prev/Next  [j/k] Scroll  [Enter] Screenshot  [q] Quit",
        Page::NotFound { .. } => "[Esc] Back to Comparison  [q] Quit",
    };

    let right = match &app.page {
        Page::Comparison => format!("{} of {} wallets", app.view().len(), app.catalog.len()),
        _ => String::new(),
    };

    widgets::render_status_bar(frame, hints, &right, theme, area);
}

/// Render popups if active
fn render_popups(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    match &app.popup {
        PopupState::None => {}
        PopupState::Help => widgets::render_help_popup(frame, theme, area),
        PopupState::Error { title, message } => {
            widgets::render_error_popup(frame, title, message, theme, area);
        }
    }

    if let Some((msg, is_error, _)) = &app.flash_message {
        widgets::render_flash_message(frame, msg, *is_error, theme, area);
    }
}

// === COMPARISON PAGE ===

fn render_comparison(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let layout = Layout::vertical([
        Constraint::Length(3), // Search + sort
        Constraint::Min(3),    // Grid
    ])
    .split(area);

    let controls = Layout::horizontal([Constraint::Min(20), Constraint::Length(34)]).split(layout[0]);

    let search_block = Block::default()
        .style(theme.block_style())
        .title(" Search ")
        .title_style(if app.search_active { theme.title() } else { theme.text_dim() })
        .borders(Borders::ALL)
        .border_style(if app.search_active {
            theme.border_focused()
        } else {
            theme.border()
        });

    let search_line = if app.query.is_empty() && !app.search_active {
        Line::styled("Search wallets or features...", theme.text_dim())
    } else if app.search_active {
        Line::from(vec![
            Span::styled(app.query.as_str(), theme.text()),
            Span::styled("▏", theme.title()),
        ])
    } else {
        Line::styled(app.query.as_str(), theme.text())
    };
    frame.render_widget(Paragraph::new(search_line).block(search_block), controls[0]);

    let sort_block = Block::default()
        .style(theme.block_style())
        .title(" Sort by [s] ")
        .title_style(theme.text_dim())
        .borders(Borders::ALL)
        .border_style(theme.border());
    frame.render_widget(
        Paragraph::new(Line::styled(app.sort.label(), theme.text())).block(sort_block),
        controls[1],
    );

    render_grid(frame, app, layout[1]);
}

/// Render the card grid, scrolled so the cursor row is visible
fn render_grid(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let view = app.view();

    frame.render_widget(Block::default().style(theme.block_style()), area);

    if view.is_empty() {
        let message = Paragraph::new(vec![
            Line::raw(""),
            Line::styled(format!("No wallets match \"{}\"", app.query), theme.text_dim()),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(message, area);
        return;
    }

    let columns = app.grid_columns();
    let visible_rows = ((area.height / CARD_HEIGHT) as usize).max(1);
    let cursor_row = app.grid_cursor / columns;
    let first_row = cursor_row.saturating_sub(visible_rows - 1);

    let cells = widgets::grid_cells(area, columns, visible_rows, CARD_HEIGHT);
    let start = first_row * columns;

    for (offset, cell) in cells.iter().enumerate() {
        let index = start + offset;
        let Some(wallet) = view.get(index) else {
            break;
        };
        render_card(frame, app, wallet, index == app.grid_cursor, *cell);
    }
}

/// Render one wallet card
fn render_card(frame: &mut Frame, app: &App, wallet: &WalletRecord, selected: bool, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .style(if selected { theme.selected() } else { theme.block_style() })
        .title(Line::from(vec![
            Span::styled(format!(" {} ", wallet.name), theme.title()),
            Span::styled(format!("★ {} ", wallet.formatted_score()), theme.star()),
        ]))
        .borders(Borders::ALL)
        .border_style(if selected {
            theme.border_focused()
        } else {
            theme.border()
        });

    let onboarding = ScoreGrade::rating(f64::from(wallet.onboarding));
    let ui_design = ScoreGrade::rating(f64::from(wallet.ui_design));
    // Issue counts on cards are always flagged
    let issues = ScoreGrade::Poor;

    let mut lines = vec![
        score_line("Onboarding", format!("{}/5", wallet.onboarding), theme.grade(onboarding), theme),
        score_line("UI Design", format!("{}/5", wallet.ui_design), theme.grade(ui_design), theme),
        score_line("UX Issues", wallet.ux_issues.to_string(), theme.grade(issues), theme),
    ];

    let display = &app.config.display;
    let badges = wallet.badges(display.feature_badges, display.badge_width);
    if !badges.is_empty() {
        lines.push(Line::styled("Key Features:", theme.text_dim()));
        let spans: Vec<Span> = badges
            .into_iter()
            .flat_map(|b| [Span::styled(format!(" {} ", b), theme.badge()), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn score_line<'a>(label: &'a str, value: String, value_style: Style, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<12}", label), theme.text_dim()),
        Span::styled(value, value_style),
    ])
}

// === DETAIL PAGE ===

fn render_detail(frame: &mut Frame, app: &App, detail: &DetailPage, area: Rect) {
    let theme = &app.theme;
    let Some(wallet) = app.catalog.get(detail.index) else {
        return;
    };

    let layout = Layout::vertical([
        Constraint::Length(5), // Title, notes, prev/next
        Constraint::Length(4), // Metrics
        Constraint::Min(3),    // Strengths, issues, features
        Constraint::Length(5), // Screenshots
    ])
    .split(area);

    render_detail_header(frame, app, wallet, layout[0]);
    render_metrics(frame, wallet, theme, layout[1]);

    let body = Paragraph::new(detail_body(wallet, theme))
        .style(theme.text())
        .block(
            Block::default()
                .style(theme.block_style())
                .borders(Borders::TOP)
                .border_style(theme.border()),
        )
        .wrap(Wrap { trim: false })
        .scroll((detail.scroll, 0));
    frame.render_widget(body, layout[2]);

    render_screenshots(frame, &wallet.screenshots, detail, theme, layout[3]);

    if let GalleryState::Open(index) = detail.gallery.state() {
        if let Some(image) = wallet.screenshots.get(index) {
            render_lightbox(frame, image, index, wallet.screenshots.len(), theme, area);
        }
    }
}

fn render_detail_header(frame: &mut Frame, app: &App, wallet: &WalletRecord, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .style(theme.block_style())
        .title(Line::from(vec![
            Span::styled(format!(" {} ", wallet.name), theme.title()),
            Span::styled(format!("★ {} ", wallet.formatted_score()), theme.star()),
        ]))
        .borders(Borders::ALL)
        .border_style(theme.border_focused());

    let adjacent = routing::adjacent(app.catalog.wallets(), &wallet.name);
    let neighbour = |i: Option<usize>| i.and_then(|i| app.catalog.get(i)).map(|w| w.name.as_str());
    let previous = adjacent.and_then(|a| neighbour(a.previous));
    let next = adjacent.and_then(|a| neighbour(a.next));

    let mut nav = Vec::new();
    if let Some(name) = previous {
        nav.push(Span::styled(format!("‹ [ {}", name), theme.link()));
    }
    if let Some(name) = next {
        if !nav.is_empty() {
            nav.push(Span::raw("    "));
        }
        nav.push(Span::styled(format!("{} ] ›", name), theme.link()));
    }

    let lines = vec![
        Line::styled(wallet.notes.as_str(), theme.text()),
        Line::raw(""),
        Line::from(nav),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_metrics(frame: &mut Frame, wallet: &WalletRecord, theme: &Theme, area: Rect) {
    let boxes = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(area);

    let metrics = [
        (
            "Onboarding",
            wallet.onboarding.to_string(),
            ScoreGrade::rating(f64::from(wallet.onboarding)),
        ),
        (
            "UI Design",
            wallet.ui_design.to_string(),
            ScoreGrade::rating(f64::from(wallet.ui_design)),
        ),
        (
            "UX Issues",
            wallet.ux_issues.to_string(),
            ScoreGrade::detail_issues(wallet.ux_issues),
        ),
    ];

    for ((label, value, grade), cell) in metrics.into_iter().zip(boxes.iter()) {
        let block = Block::default()
            .style(theme.block_style())
            .title(format!(" {} ", label))
            .title_style(theme.text_dim())
            .borders(Borders::ALL)
            .border_style(theme.border());
        let widget = Paragraph::new(Line::styled(value, theme.grade(grade)))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(widget, *cell);
    }
}

/// Strengths, issues and unique features as one scrollable text
fn detail_body<'a>(wallet: &'a WalletRecord, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = vec![Line::styled("Strengths", theme.title())];
    if wallet.good.is_empty() {
        lines.push(Line::styled("No strengths documented.", theme.text_dim()));
    }
    for item in &wallet.good {
        lines.push(Line::from(vec![
            Span::styled("  ✓ ", theme.success()),
            Span::styled(item.as_str(), theme.text()),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled("Areas for Improvement", theme.title()));
    if wallet.ux_issues_list.is_empty() {
        lines.push(Line::styled("No issues documented.", theme.text_dim()));
    }
    for issue in &wallet.ux_issues_list {
        lines.push(Line::from(vec![
            Span::styled("  ! ", theme.error()),
            Span::styled(issue.as_str(), theme.text()),
        ]));
    }

    if !wallet.unique_features.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::styled("Unique Features", theme.title()));
        for feature in &wallet.unique_features {
            lines.push(Line::from(vec![
                Span::styled("  • ", theme.star()),
                Span::styled(feature.as_str(), theme.text()),
            ]));
        }
    }

    lines
}

/// Thumbnail strip; the focused thumbnail follows the gallery cursor
fn render_screenshots(
    frame: &mut Frame,
    images: &[GalleryImage],
    detail: &DetailPage,
    theme: &Theme,
    area: Rect,
) {
    let block = Block::default()
        .style(theme.block_style())
        .title(format!(" Screenshots ({}) ", images.len()))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border());

    if images.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled("No screenshots available yet.", theme.text_dim()))
                .block(block),
            area,
        );
        return;
    }

    let spans: Vec<Span> = images
        .iter()
        .enumerate()
        .flat_map(|(i, image)| {
            let style = if i == detail.gallery.cursor() {
                theme.selected()
            } else {
                theme.badge()
            };
            [
                Span::styled(format!(" {} {} ", i + 1, image.alt), style),
                Span::raw(" "),
            ]
        })
        .collect();

    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// Full-page screenshot viewer
fn render_lightbox(
    frame: &mut Frame,
    image: &GalleryImage,
    index: usize,
    total: usize,
    theme: &Theme,
    area: Rect,
) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .style(theme.block_style())
        .title(format!(" Screenshot {} / {} ", index + 1, total))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::raw(""),
        Line::styled(image.alt.as_str(), theme.text().add_modifier(Modifier::BOLD)),
        Line::styled(image.src.as_str(), theme.text_dim()),
        Line::raw(""),
    ];
    if let Some(description) = &image.description {
        lines.push(Line::styled(description.as_str(), theme.text()));
    }

    let content_area = widgets::centered_rect(
        inner.width.saturating_sub(8),
        inner.height.saturating_sub(2),
        inner,
    );
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        content_area,
    );

    let nav_area = Rect {
        y: inner.y + inner.height.saturating_sub(1),
        height: inner.height.min(1),
        ..inner
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("‹ ←  previous", theme.text_dim()),
            Span::raw("      "),
            Span::styled("Esc  close", theme.text_dim()),
            Span::raw("      "),
            Span::styled("next  → ›", theme.text_dim()),
        ]))
        .alignment(Alignment::Center),
        nav_area,
    );
}

// === NOT FOUND PAGE ===

fn render_not_found(frame: &mut Frame, slug: &str, theme: &Theme, area: Rect) {
    let block = Block::default()
        .style(theme.block_style())
        .borders(Borders::ALL)
        .border_style(theme.border());

    let lines = vec![
        Line::raw(""),
        Line::styled(routing::NOT_FOUND_TITLE, theme.error().add_modifier(Modifier::BOLD)),
        Line::raw(""),
        Line::styled(format!("No wallet matches \"{}\"", slug), theme.text_dim()),
        Line::raw(""),
        Line::styled("[Esc] Back to Comparison", theme.text()),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
