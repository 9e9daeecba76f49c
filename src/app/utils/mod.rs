//! # Utilities

pub mod text;

pub use text::{truncate_name, ELLIPSIS};
