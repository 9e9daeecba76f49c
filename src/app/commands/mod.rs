//! # Command Implementations
//!
//! Key bindings as small stateless commands. Each command says whether a key
//! event is its own and, if so, which [`CommandEvent`]s it produces. The
//! [`CommandRegistry`] runs the first relevant command.

pub mod app;
pub mod context;
pub mod events;
pub mod list;
pub mod navigation;
pub mod registry;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub use context::{CommandContext, ViewModelSnapshot};
pub use events::CommandEvent;
pub use registry::CommandRegistry;

/// A single key binding
pub trait Command: Send + Sync {
    /// Whether this command handles `event` in the current state
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool;

    /// Produce the events describing what should happen
    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>>;

    /// Get command name for debugging and logging
    fn name(&self) -> &'static str;
}

/// `ch` typed without Ctrl or Alt (Shift is part of the character)
pub(crate) fn is_plain_char(event: &KeyEvent, ch: char) -> bool {
    event.code == KeyCode::Char(ch)
        && !event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// `ch` typed with Ctrl held
pub(crate) fn is_ctrl_char(event: &KeyEvent, ch: char) -> bool {
    event.code == KeyCode::Char(ch) && event.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_char_should_ignore_shift_but_not_ctrl() {
        let shifted = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        let ctrl = KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL);
        let plain = KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE);

        assert!(is_plain_char(&shifted, 'G'));
        assert!(!is_plain_char(&ctrl, 'f'));
        assert!(is_plain_char(&plain, 'f'));
        assert!(is_ctrl_char(&ctrl, 'f'));
        assert!(!is_ctrl_char(&plain, 'f'));
    }
}
