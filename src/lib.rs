//! # charlist - Rick & Morty Character Browser
//!
//! Fetches the first page of characters from the Rick and Morty API and shows
//! them as a scrollable card list with a "Filter Male & Alive" toggle.
//!
//! ## Architecture
//!
//! This application follows the Model-View-ViewModel (MVVM) pattern:
//!
//! ```text
//! ┌─────────────┐    Events    ┌───────────────┐   Records    ┌──────────────┐
//! │    View     │◄─────────────│   ViewModel   │◄─────────────│   Services   │
//! │             │              │               │              │              │
//! │ - Terminal  │              │ - List state  │              │ - HTTP fetch │
//! │ - Plain     │              │ - Filter      │              │ - Scripted   │
//! │   listing   │              │ - Viewport    │              │   (tests)    │
//! └─────────────┘              └───────────────┘              └──────────────┘
//!                                      ▲
//!                                      │ Commands
//!                                      ▼
//!                               ┌──────────────┐
//!                               │  Controller  │
//!                               │              │
//!                               │ - Key        │
//!                               │   bindings   │
//!                               │ - Event Loop │
//!                               └──────────────┘
//! ```
//!
//! Fetches run on tokio tasks. Every load gets a new request token and only
//! the completion carrying the newest token is applied, so a slow response
//! can never overwrite a newer one.

pub mod cmd_args;
pub mod config;
pub mod app;

// Re-export main types for easy access
pub use app::*;
