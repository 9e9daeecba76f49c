//! # Command Events
//!
//! Events produced by commands that describe what should happen.
//! Commands produce these events, and the controller applies them to the ViewModel.

use crate::app::view_models::{ScrollAmount, ScrollDirection};

/// Events that commands can produce to request changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandEvent {
    /// Flip the "Male & Alive" filter
    ToggleFilterRequested,

    /// Fetch the page again
    ReloadRequested,

    /// Move the list
    ScrollRequested {
        direction: ScrollDirection,
        amount: ScrollAmount,
    },

    /// Jump to the first card
    ScrollToTopRequested,

    /// Jump to the last page of cards
    ScrollToBottomRequested,

    /// Request application quit
    QuitRequested,
}
