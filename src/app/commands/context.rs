//! # Command Context
//!
//! Read-only state that commands look at when deciding whether a key is theirs.

use crate::app::view_models::ViewModel;

/// Read-only snapshot of ViewModel state for commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModelSnapshot {
    pub loading: bool,
    pub filter_active: bool,
    pub character_count: usize,
}

impl ViewModelSnapshot {
    /// Create snapshot from current ViewModel state
    pub fn from_view_model(view_model: &ViewModel) -> Self {
        let view = view_model.view();
        Self {
            loading: view.loading,
            filter_active: view.filter_active,
            character_count: view.characters.len(),
        }
    }
}

/// Base context available to all commands
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub state: ViewModelSnapshot,
}

impl CommandContext {
    pub fn new(state: ViewModelSnapshot) -> Self {
        Self { state }
    }

    /// Whether the list is on screen (not replaced by the loading indicator)
    pub fn list_visible(&self) -> bool {
        !self.state.loading && self.state.character_count > 0
    }
}

#[cfg(test)]
pub(crate) fn test_context(loading: bool, character_count: usize) -> CommandContext {
    CommandContext::new(ViewModelSnapshot {
        loading,
        filter_active: false,
        character_count,
    })
}
