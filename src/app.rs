//! Application state and event handling
//!
//! This is the core of walletux, managing:
//! - The current page (comparison grid, wallet details, not found)
//! - Event handling (keyboard and mouse wheel)
//! - Navigation between wallets through their slugs

use crate::catalog::Catalog;
use crate::compare::compute_view;
use crate::config::Config;
use crate::gallery::{Gallery, ScrollLock};
use crate::routing;
use crate::types::{SortKey, WalletRecord};
use crate::ui::Theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use std::time::Instant;

/// Seconds a flash message stays on screen
const FLASH_SECS: u64 = 3;

/// Main application state
pub struct App {
    // Core state
    pub should_quit: bool,
    pub config: Config,
    pub theme: Theme,
    pub catalog: Catalog,
    pub page: Page,
    pub scroll_lock: ScrollLock,
    pub viewport_width: u16,

    // Comparison page state
    pub query: String,
    pub search_active: bool,
    pub sort: SortKey,
    pub grid_cursor: usize,

    // Popup state
    pub popup: PopupState,

    // Flash message (temporary feedback)
    pub flash_message: Option<(String, bool, Instant)>, // (message, is_error, timestamp)
}

/// Which page is mounted
#[derive(Debug)]
pub enum Page {
    Comparison,
    Detail(DetailPage),
    NotFound { slug: String },
}

/// A mounted wallet detail page; its gallery lives and dies with it
#[derive(Debug)]
pub struct DetailPage {
    pub index: usize,
    pub scroll: u16,
    pub gallery: Gallery,
}

/// Popup overlay state
#[derive(Debug, Clone)]
pub enum PopupState {
    None,
    Help,
    Error { title: String, message: String },
}

impl App {
    /// Create a new App instance
    pub fn new(config: Config, catalog: Catalog) -> Self {
        let theme = Theme::from_name(config.theme);
        let sort = config.default_sort;

        Self {
            should_quit: false,
            config,
            theme,
            catalog,
            page: Page::Comparison,
            scroll_lock: ScrollLock::new(),
            viewport_width: 80,

            query: String::new(),
            search_active: false,
            sort,
            grid_cursor: 0,

            popup: PopupState::None,
            flash_message: None,
        }
    }

    /// The filtered and sorted comparison grid
    pub fn view(&self) -> Vec<&WalletRecord> {
        compute_view(self.catalog.wallets(), &self.query, self.sort)
    }

    /// Card columns for the current terminal width
    pub fn grid_columns(&self) -> usize {
        self.config.columns.count(self.viewport_width)
    }

    /// Wallet shown on the mounted detail page
    pub fn current_wallet(&self) -> Option<&WalletRecord> {
        match &self.page {
            Page::Detail(detail) => self.catalog.get(detail.index),
            _ => None,
        }
    }

    pub fn resize(&mut self, width: u16) {
        self.viewport_width = width;
    }

    /// Mount the page for `slug`, or the not-found page
    pub fn navigate_to_slug(&mut self, slug: &str) {
        match routing::resolve(self.catalog.wallets(), slug) {
            Some(index) => {
                let images = self.catalog.get(index).map_or(0, |w| w.screenshots.len());
                tracing::info!(slug, index, "opening wallet details");
                // Replacing the page drops the previous gallery and its scroll guard
                self.page = Page::Detail(DetailPage {
                    index,
                    scroll: 0,
                    gallery: Gallery::new(images, self.scroll_lock.clone()),
                });
            }
            None => {
                tracing::warn!(slug, "no wallet for slug");
                self.page = Page::NotFound {
                    slug: slug.to_string(),
                };
            }
        }
    }

    /// Return to the grid, keeping the cursor on the wallet just viewed
    pub fn navigate_home(&mut self) {
        let name = self.current_wallet().map(|w| w.name.clone());
        self.page = Page::Comparison;
        if let Some(name) = name {
            if let Some(pos) = self.view().iter().position(|w| w.name == name) {
                self.grid_cursor = pos;
            }
        }
        self.clamp_grid_cursor();
    }

    /// Expire old flash messages
    pub fn tick(&mut self) {
        if let Some((_, _, instant)) = &self.flash_message {
            if instant.elapsed().as_secs() >= FLASH_SECS {
                self.flash_message = None;
            }
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        self.tick();

        match self.popup {
            PopupState::Help => {
                if matches!(
                    key.code,
                    KeyCode::Char('?') | KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')
                ) {
                    self.popup = PopupState::None;
                }
                return Ok(());
            }
            PopupState::Error { .. } => {
                if matches!(key.code, KeyCode::Char('o') | KeyCode::Enter | KeyCode::Esc) {
                    self.popup = PopupState::None;
                }
                return Ok(());
            }
            PopupState::None => {}
        }

        // The lightbox sees keys first, and only while its page is mounted
        if let Page::Detail(detail) = &mut self.page {
            if detail.gallery.handle_key(key) {
                return Ok(());
            }
        }

        if self.search_active {
            self.handle_search_key(key);
            return Ok(());
        }

        // Global keys
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return Ok(());
            }
            KeyCode::Char('?') => {
                self.popup = PopupState::Help;
                return Ok(());
            }
            KeyCode::Char('t') => {
                self.config.theme = self.config.theme.next();
                self.theme = Theme::from_name(self.config.theme);
                self.save_config(&format!("Theme: {}", self.config.theme.as_str()));
                return Ok(());
            }
            _ => {}
        }

        match self.page {
            Page::Comparison => self.handle_comparison_key(key),
            Page::Detail(_) => self.handle_detail_key(key),
            Page::NotFound { .. } => {
                if matches!(
                    key.code,
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('b')
                ) {
                    self.navigate_home();
                }
            }
        }
        Ok(())
    }

    /// Handle a mouse event (wheel scrolling only)
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(self.popup, PopupState::None) {
            return;
        }
        let down = match mouse.kind {
            MouseEventKind::ScrollDown => true,
            MouseEventKind::ScrollUp => false,
            _ => return,
        };

        match self.page {
            Page::Comparison => self.move_grid_cursor_rows(down),
            Page::Detail(_) => self.scroll_detail(down),
            Page::NotFound { .. } => {}
        }
    }

    /// Handle typing in the search box
    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => {
                self.query.push(c);
                self.grid_cursor = 0;
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.grid_cursor = 0;
            }
            KeyCode::Enter | KeyCode::Esc => {
                self.search_active = false;
                tracing::debug!(query = %self.query, "search updated");
            }
            _ => {}
        }
    }

    /// Handle keys on the comparison grid
    fn handle_comparison_key(&mut self, key: KeyEvent) {
        let count = self.view().len();

        match key.code {
            KeyCode::Char('/') => {
                self.search_active = true;
            }
            KeyCode::Esc => {
                if !self.query.is_empty() {
                    self.query.clear();
                    self.grid_cursor = 0;
                }
            }
            KeyCode::Char('j') | KeyCode::Down => self.move_grid_cursor_rows(true),
            KeyCode::Char('k') | KeyCode::Up => self.move_grid_cursor_rows(false),
            KeyCode::Char('l') | KeyCode::Right => {
                if self.grid_cursor + 1 < count {
                    self.grid_cursor += 1;
                }
            }
            KeyCode::Char('h') | KeyCode::Left => {
                self.grid_cursor = self.grid_cursor.saturating_sub(1);
            }
            KeyCode::Char('g') => self.grid_cursor = 0,
            KeyCode::Char('G') => self.grid_cursor = count.saturating_sub(1),
            KeyCode::Char('s') => self.set_sort(self.sort.next()),
            KeyCode::Char('S') => self.set_sort(self.sort.previous()),
            KeyCode::Char('c') => {
                self.config.columns = self.config.columns.next();
                self.save_config(&format!("Columns: {}", self.config.columns.as_str()));
            }
            KeyCode::Enter => {
                let slug = self
                    .view()
                    .get(self.grid_cursor)
                    .map(|w| routing::slug(&w.name));
                if let Some(slug) = slug {
                    self.navigate_to_slug(&slug);
                }
            }
            _ => {}
        }

        self.clamp_grid_cursor();
    }

    /// Handle keys on a wallet detail page (gallery closed)
    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => self.navigate_home(),
            KeyCode::Char('[') | KeyCode::Char('p') => self.navigate_adjacent(false),
            KeyCode::Char(']') | KeyCode::Char('n') => self.navigate_adjacent(true),
            KeyCode::Char('j') | KeyCode::Down => self.scroll_detail(true),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_detail(false),
            KeyCode::Char('l') | KeyCode::Right => self.with_gallery(|g| g.move_cursor(true)),
            KeyCode::Char('h') | KeyCode::Left => self.with_gallery(|g| g.move_cursor(false)),
            KeyCode::Enter => self.with_gallery(Gallery::open_at_cursor),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                let total = self.current_wallet().map_or(0, |w| w.screenshots.len());
                if index < total {
                    self.with_gallery(|g| g.open(index));
                } else {
                    self.show_flash(&format!("No screenshot {} ({} available)", c, total), true);
                }
            }
            _ => {}
        }
    }

    fn with_gallery(&mut self, f: impl FnOnce(&mut Gallery)) {
        if let Page::Detail(detail) = &mut self.page {
            f(&mut detail.gallery);
        }
    }

    /// Go to the previous or next wallet in catalog order
    fn navigate_adjacent(&mut self, forward: bool) {
        let Some(wallet) = self.current_wallet() else {
            return;
        };
        let Some(adjacent) = routing::adjacent(self.catalog.wallets(), &wallet.name) else {
            return;
        };
        let target = if forward { adjacent.next } else { adjacent.previous };
        let slug = target
            .and_then(|i| self.catalog.get(i))
            .map(|w| routing::slug(&w.name));
        if let Some(slug) = slug {
            self.navigate_to_slug(&slug);
        }
    }

    /// Scroll the detail body unless the gallery holds the scroll lock
    fn scroll_detail(&mut self, down: bool) {
        if self.scroll_lock.is_locked() {
            return;
        }
        let limit = self.current_wallet().map_or(0, detail_scroll_limit);
        if let Page::Detail(detail) = &mut self.page {
            detail.scroll = if down {
                detail.scroll.saturating_add(1).min(limit)
            } else {
                detail.scroll.saturating_sub(1)
            };
        }
    }

    fn move_grid_cursor_rows(&mut self, down: bool) {
        let count = self.view().len();
        let columns = self.grid_columns();
        if down {
            if self.grid_cursor + columns < count {
                self.grid_cursor += columns;
            }
        } else {
            self.grid_cursor = self.grid_cursor.saturating_sub(columns);
        }
    }

    fn clamp_grid_cursor(&mut self) {
        let count = self.view().len();
        self.grid_cursor = self.grid_cursor.min(count.saturating_sub(1));
    }

    fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.grid_cursor = 0;
        tracing::debug!(sort = sort.as_str(), "sort changed");
    }

    fn save_config(&mut self, message: &str) {
        if let Err(e) = self.config.save() {
            tracing::warn!(error = %format!("{:#}", e), "config save failed");
            self.show_error("Save Failed", &format!("{:#}", e));
        } else {
            self.show_flash(message, false);
        }
    }

    fn show_error(&mut self, title: &str, message: &str) {
        self.popup = PopupState::Error {
            title: title.to_string(),
            message: message.to_string(),
        };
    }

    fn show_flash(&mut self, message: &str, is_error: bool) {
        self.flash_message = Some((message.to_string(), is_error, Instant::now()));
    }
}

/// Furthest the detail body may scroll for a wallet
pub fn detail_scroll_limit(wallet: &WalletRecord) -> u16 {
    let lines = wallet.good.len() + wallet.ux_issues_list.len() + wallet.unique_features.len();
    // Section titles and spacing
    (lines + 8).min(u16::MAX as usize) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::record;
    use crate::gallery::GalleryState;
    use crate::types::GalleryImage;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn shot(n: usize) -> GalleryImage {
        GalleryImage {
            src: format!("/screenshots/{}.png", n),
            alt: format!("Screen {}", n),
            description: None,
        }
    }

    fn test_app() -> App {
        let mut x = record("X Wallet", 5, 5, 0);
        x.unique_features = vec!["Hardware support".into()];
        x.screenshots = (0..3).map(shot).collect();
        x.good = vec!["Fast".into(), "Clean".into()];
        let y = record("Y", 3, 3, 2);
        let z = record("Z", 4, 4, 1);
        let catalog = Catalog::new(vec![x, y, z]).unwrap();
        App::new(Config::default(), catalog)
    }

    fn press(app: &mut App, codes: &[KeyCode]) {
        for code in codes {
            app.handle_key(key(*code)).unwrap();
        }
    }

    fn detail(app: &App) -> &DetailPage {
        match &app.page {
            Page::Detail(d) => d,
            other => panic!("expected detail page, got {:?}", other),
        }
    }

    #[test]
    fn test_enter_opens_top_card() {
        let mut app = test_app();
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.current_wallet().unwrap().name, "X Wallet");
    }

    #[test]
    fn test_search_and_sort() {
        let mut app = test_app();
        press(&mut app, &[KeyCode::Char('/'), KeyCode::Char('H'), KeyCode::Char('A')]);
        assert!(app.search_active);
        let names: Vec<_> = app.view().iter().map(|w| w.name.clone()).collect();
        assert_eq!(names, vec!["X Wallet"]);

        // 'q' while typing is part of the query, not quit
        press(&mut app, &[KeyCode::Char('q')]);
        assert!(!app.should_quit);
        assert!(app.view().is_empty());

        press(&mut app, &[KeyCode::Enter, KeyCode::Esc]);
        assert!(!app.search_active);
        assert!(app.query.is_empty());

        press(&mut app, &[KeyCode::Char('s'), KeyCode::Char('s'), KeyCode::Char('s')]);
        assert_eq!(app.sort, SortKey::Ux);
        assert_eq!(app.view()[0].name, "X Wallet");
    }

    #[test]
    fn test_adjacent_navigation() {
        let mut app = test_app();
        app.navigate_to_slug("y");
        press(&mut app, &[KeyCode::Char(']')]);
        assert_eq!(app.current_wallet().unwrap().name, "Z");
        press(&mut app, &[KeyCode::Char(']')]);
        assert_eq!(app.current_wallet().unwrap().name, "Z");
        press(&mut app, &[KeyCode::Char('['), KeyCode::Char('[')]);
        assert_eq!(app.current_wallet().unwrap().name, "X Wallet");
        press(&mut app, &[KeyCode::Char('[')]);
        assert_eq!(app.current_wallet().unwrap().name, "X Wallet");
    }

    #[test]
    fn test_unknown_slug_not_found() {
        let mut app = test_app();
        app.navigate_to_slug("ledger-live");
        assert!(matches!(app.page, Page::NotFound { .. }));
        press(&mut app, &[KeyCode::Esc]);
        assert!(matches!(app.page, Page::Comparison));
    }

    #[test]
    fn test_gallery_keys_and_scroll_lock() {
        let mut app = test_app();
        app.navigate_to_slug("x-wallet");

        press(&mut app, &[KeyCode::Char('j')]);
        assert_eq!(detail(&app).scroll, 1);

        press(&mut app, &[KeyCode::Char('2')]);
        assert_eq!(detail(&app).gallery.state(), GalleryState::Open(1));
        assert!(app.scroll_lock.is_locked());

        // Scrolling is suppressed while the viewer is open
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(detail(&app).scroll, 1);

        press(&mut app, &[KeyCode::Right, KeyCode::Right]);
        assert_eq!(detail(&app).gallery.state(), GalleryState::Open(0));

        // Esc closes the viewer, not the page
        press(&mut app, &[KeyCode::Esc]);
        assert_eq!(detail(&app).gallery.state(), GalleryState::Closed);
        assert!(!app.scroll_lock.is_locked());
        assert_eq!(app.current_wallet().unwrap().name, "X Wallet");
    }

    #[test]
    fn test_leaving_page_releases_lock() {
        let mut app = test_app();
        app.navigate_to_slug("x-wallet");
        press(&mut app, &[KeyCode::Enter]);
        assert!(app.scroll_lock.is_locked());

        app.navigate_home();
        assert!(!app.scroll_lock.is_locked());
        assert!(matches!(app.page, Page::Comparison));
    }

    #[test]
    fn test_missing_screenshot_flashes_error() {
        let mut app = test_app();
        app.navigate_to_slug("x-wallet");
        press(&mut app, &[KeyCode::Char('4')]);
        assert_eq!(detail(&app).gallery.state(), GalleryState::Closed);
        assert!(!app.scroll_lock.is_locked());
        let (message, is_error, _) = app.flash_message.as_ref().unwrap();
        assert!(*is_error);
        assert_eq!(message, "No screenshot 4 (3 available)");

        app.navigate_to_slug("y");
        press(&mut app, &[KeyCode::Char('1')]);
        assert_eq!(app.flash_message.as_ref().unwrap().0, "No screenshot 1 (0 available)");
    }

    #[test]
    fn test_quit_swallowed_by_open_gallery() {
        let mut app = test_app();
        app.navigate_to_slug("x-wallet");
        press(&mut app, &[KeyCode::Enter, KeyCode::Char('q')]);
        assert!(!app.should_quit);
        press(&mut app, &[KeyCode::Esc, KeyCode::Char('q')]);
        assert!(app.should_quit);
    }

    #[test]
    fn test_home_keeps_cursor_on_wallet() {
        let mut app = test_app();
        app.navigate_to_slug("y");
        press(&mut app, &[KeyCode::Esc]);
        let view = app.view();
        assert_eq!(view[app.grid_cursor].name, "Y");
    }

    #[test]
    fn test_help_popup() {
        let mut app = test_app();
        press(&mut app, &[KeyCode::Char('?')]);
        assert!(matches!(app.popup, PopupState::Help));
        press(&mut app, &[KeyCode::Char('j')]);
        assert!(matches!(app.popup, PopupState::Help));
        press(&mut app, &[KeyCode::Esc]);
        assert!(matches!(app.popup, PopupState::None));
    }

    #[test]
    fn test_grid_cursor_moves_by_rows() {
        let mut app = test_app();
        app.resize(100); // two columns in auto mode
        press(&mut app, &[KeyCode::Char('j')]);
        assert_eq!(app.grid_cursor, 2);
        press(&mut app, &[KeyCode::Char('j')]);
        assert_eq!(app.grid_cursor, 2);
        press(&mut app, &[KeyCode::Char('h'), KeyCode::Char('k')]);
        assert_eq!(app.grid_cursor, 0);
        press(&mut app, &[KeyCode::Char('G')]);
        assert_eq!(app.grid_cursor, 2);
    }
}
