//! Screenshot gallery and lightbox navigation
//!
//! A `Gallery` belongs to a mounted detail page. It only sees key events
//! while that page is mounted, and while it is open it holds a
//! `ScrollGuard` that keeps the page behind it from scrolling. Dropping the
//! gallery (close, leaving the page, quitting) releases the guard.

use crossterm::event::{KeyCode, KeyEvent};
use std::cell::Cell;
use std::rc::Rc;

/// Page-wide background scroll lock
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    held: Rc<Cell<bool>>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock background scrolling until the returned guard is dropped
    pub fn acquire(&self) -> ScrollGuard {
        self.held.set(true);
        ScrollGuard {
            held: Rc::clone(&self.held),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.held.get()
    }
}

/// Releases the scroll lock on drop
#[derive(Debug)]
pub struct ScrollGuard {
    held: Rc<Cell<bool>>,
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        self.held.set(false);
    }
}

/// Lightbox state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryState {
    Closed,
    Open(usize),
}

/// Navigator over a fixed number of images
#[derive(Debug)]
pub struct Gallery {
    len: usize,
    selected: Option<usize>,
    // Thumbnail focus while closed
    cursor: usize,
    lock: ScrollLock,
    guard: Option<ScrollGuard>,
}

impl Gallery {
    pub fn new(len: usize, lock: ScrollLock) -> Self {
        Self {
            len,
            selected: None,
            cursor: 0,
            lock,
            guard: None,
        }
    }

    pub fn state(&self) -> GalleryState {
        match self.selected {
            Some(i) => GalleryState::Open(i),
            None => GalleryState::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Open the lightbox at `index`; out-of-range indices are ignored
    pub fn open(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.selected = Some(index);
        self.cursor = index;
        if self.guard.is_none() {
            self.guard = Some(self.lock.acquire());
        }
        tracing::debug!(index, "gallery opened");
    }

    pub fn close(&mut self) {
        if let Some(index) = self.selected.take() {
            // Leave the thumbnail cursor on the last viewed image
            self.cursor = index;
            tracing::debug!(index, "gallery closed");
        }
        self.guard = None;
    }

    pub fn next(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some((i + 1) % self.len);
        }
    }

    pub fn previous(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some((i + self.len - 1) % self.len);
        }
    }

    /// Move the thumbnail cursor, wrapping at both ends
    pub fn move_cursor(&mut self, forward: bool) {
        if self.len == 0 {
            return;
        }
        self.cursor = if forward {
            (self.cursor + 1) % self.len
        } else {
            (self.cursor + self.len - 1) % self.len
        };
    }

    pub fn open_at_cursor(&mut self) {
        self.open(self.cursor);
    }

    /// Lightbox key handling; returns true when the key was consumed
    ///
    /// Closed galleries consume nothing. An open gallery is modal and
    /// swallows every key, acting only on Left, Right and Esc.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.is_open() {
            return false;
        }
        match key.code {
            KeyCode::Right => self.next(),
            KeyCode::Left => self.previous(),
            KeyCode::Esc => self.close(),
            _ => {}
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_starts_closed() {
        let gallery = Gallery::new(3, ScrollLock::new());
        assert_eq!(gallery.state(), GalleryState::Closed);
    }

    #[test]
    fn test_next_cycles_back() {
        for n in 1..=6 {
            for start in 0..n {
                let mut gallery = Gallery::new(n, ScrollLock::new());
                gallery.open(start);
                for _ in 0..n {
                    gallery.next();
                }
                assert_eq!(gallery.state(), GalleryState::Open(start));
            }
        }
    }

    #[test]
    fn test_previous_cycles_back() {
        for n in 1..=6 {
            for start in 0..n {
                let mut gallery = Gallery::new(n, ScrollLock::new());
                gallery.open(start);
                for _ in 0..n {
                    gallery.previous();
                }
                assert_eq!(gallery.state(), GalleryState::Open(start));
            }
        }
    }

    #[test]
    fn test_wraparound_edges() {
        let mut gallery = Gallery::new(5, ScrollLock::new());
        gallery.open(4);
        gallery.next();
        assert_eq!(gallery.state(), GalleryState::Open(0));
        gallery.previous();
        assert_eq!(gallery.state(), GalleryState::Open(4));
    }

    #[test]
    fn test_open_then_close() {
        for i in 0..4 {
            let mut gallery = Gallery::new(4, ScrollLock::new());
            gallery.open(i);
            gallery.close();
            assert_eq!(gallery.state(), GalleryState::Closed);
        }
    }

    #[test]
    fn test_open_out_of_range_ignored() {
        let lock = ScrollLock::new();
        let mut gallery = Gallery::new(2, lock.clone());
        gallery.open(2);
        assert_eq!(gallery.state(), GalleryState::Closed);
        assert!(!lock.is_locked());

        let mut empty = Gallery::new(0, lock.clone());
        empty.open(0);
        empty.next();
        empty.move_cursor(true);
        assert_eq!(empty.state(), GalleryState::Closed);
    }

    #[test]
    fn test_navigation_noop_when_closed() {
        let mut gallery = Gallery::new(3, ScrollLock::new());
        gallery.next();
        gallery.previous();
        assert_eq!(gallery.state(), GalleryState::Closed);
    }

    #[test]
    fn test_keys_ignored_when_closed() {
        let mut gallery = Gallery::new(3, ScrollLock::new());
        for code in [KeyCode::Right, KeyCode::Left, KeyCode::Esc] {
            assert!(!gallery.handle_key(key(code)));
            assert_eq!(gallery.state(), GalleryState::Closed);
        }
    }

    #[test]
    fn test_keys_when_open() {
        let mut gallery = Gallery::new(3, ScrollLock::new());
        gallery.open(0);
        assert!(gallery.handle_key(key(KeyCode::Right)));
        assert_eq!(gallery.state(), GalleryState::Open(1));
        assert!(gallery.handle_key(key(KeyCode::Left)));
        assert!(gallery.handle_key(key(KeyCode::Left)));
        assert_eq!(gallery.state(), GalleryState::Open(2));
        assert!(gallery.handle_key(key(KeyCode::Char('x'))));
        assert_eq!(gallery.state(), GalleryState::Open(2));
        assert!(gallery.handle_key(key(KeyCode::Esc)));
        assert_eq!(gallery.state(), GalleryState::Closed);
        assert_eq!(gallery.cursor(), 2);
    }

    #[test]
    fn test_scroll_lock_follows_open_state() {
        let lock = ScrollLock::new();
        let mut gallery = Gallery::new(3, lock.clone());
        assert!(!lock.is_locked());

        gallery.open(1);
        assert!(lock.is_locked());
        gallery.open(2);
        assert!(lock.is_locked());

        gallery.close();
        assert!(!lock.is_locked());

        // Repeated cycles never leave the lock held
        for i in 0..10 {
            gallery.open(i % 3);
            gallery.close();
        }
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_scroll_lock_released_on_drop() {
        let lock = ScrollLock::new();
        {
            let mut gallery = Gallery::new(3, lock.clone());
            gallery.open(0);
            assert!(lock.is_locked());
        }
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_cursor_wraps() {
        let mut gallery = Gallery::new(3, ScrollLock::new());
        gallery.move_cursor(false);
        assert_eq!(gallery.cursor(), 2);
        gallery.move_cursor(true);
        assert_eq!(gallery.cursor(), 0);
        gallery.open_at_cursor();
        assert_eq!(gallery.state(), GalleryState::Open(0));
    }
}
