//! # Views Module
//!
//! Everything that turns list state into text on a screen or a pipe.

pub mod ansi_escape_codes;
pub mod plain;
pub mod terminal_renderer;

/// Title shown above the list
pub const HEADER_TEXT: &str = "Rick & Morty Characters List";

// Re-export main types for convenience
pub use plain::render_plain;
pub use terminal_renderer::{TerminalRenderer, ViewRenderer};
