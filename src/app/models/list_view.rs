//! Read-only view of the list state handed to the renderer.

use super::CharacterRecord;

/// What the renderer is allowed to see of the controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListView<'a> {
    pub characters: &'a [CharacterRecord],
    pub loading: bool,
    pub filter_active: bool,
}

impl ListView<'_> {
    /// Label of the filter button for the current filter state
    pub fn filter_label(&self) -> &'static str {
        if self.filter_active {
            "Reset Filter"
        } else {
            "Filter Male & Alive"
        }
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}
