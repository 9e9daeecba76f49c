//! # List Viewport
//!
//! Scroll position of the card list and the screen layout it depends on.

use std::ops::Range;

/// Rows above the list: title, filter button, spacer
pub const HEADER_ROWS: u16 = 3;

/// Rows below the list
pub const STATUS_ROWS: u16 = 1;

/// Rows taken by one card: name line, details line, spacer
pub const CARD_ROWS: u16 = 3;

/// How many cards fit on a screen of the given height (at least one)
pub fn cards_per_page(terminal_height: u16) -> usize {
    let list_rows = terminal_height.saturating_sub(HEADER_ROWS + STATUS_ROWS);
    usize::from(list_rows / CARD_ROWS).max(1)
}

/// Index of the first visible card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListViewport {
    offset: usize,
}

impl ListViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    fn max_offset(len: usize, page: usize) -> usize {
        len.saturating_sub(page)
    }

    fn set_offset(&mut self, offset: usize) -> bool {
        let changed = self.offset != offset;
        self.offset = offset;
        changed
    }

    /// Returns whether the offset changed
    pub fn scroll_down(&mut self, amount: usize, len: usize, page: usize) -> bool {
        let target = (self.offset + amount).min(Self::max_offset(len, page));
        self.set_offset(target)
    }

    pub fn scroll_up(&mut self, amount: usize) -> bool {
        self.set_offset(self.offset.saturating_sub(amount))
    }

    pub fn to_top(&mut self) -> bool {
        self.set_offset(0)
    }

    pub fn to_bottom(&mut self, len: usize, page: usize) -> bool {
        self.set_offset(Self::max_offset(len, page))
    }

    /// Pull the offset back after the list shrank or the screen grew
    pub fn clamp(&mut self, len: usize, page: usize) -> bool {
        self.set_offset(self.offset.min(Self::max_offset(len, page)))
    }

    /// Indices of the cards on screen
    pub fn visible_range(&self, len: usize, page: usize) -> Range<usize> {
        let start = self.offset.min(len);
        let end = (start + page).min(len);
        start..end
    }
}
