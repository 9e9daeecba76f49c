//! # Controllers Module
//!
//! Drive the view models: the interactive event loop and the one-shot
//! plain listing.

pub mod app_controller;
pub mod plain;

// Re-export main types for convenience
pub use app_controller::AppController;
pub use plain::run_plain;
