//! # View Models
//!
//! State and behavior behind the screen: the list controller, the filter,
//! the scroll position and the aggregate [`ViewModel`] the renderer reads.

pub mod character_list;
pub mod core;
pub mod filter;
pub mod viewport;

pub use character_list::{CharacterListController, FetchOutcome};
pub use self::core::{ScrollAmount, ScrollDirection, ViewModel};
pub use filter::male_and_alive;
pub use viewport::{cards_per_page, ListViewport};
