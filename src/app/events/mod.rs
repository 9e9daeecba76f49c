//! # Events Module
//!
//! Events flowing from the view model to the view.

pub mod view_events;

pub use view_events::ViewEvent;
