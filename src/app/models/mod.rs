//! # Models
//!
//! Plain data that the rest of the application passes around.

pub mod character;
pub mod list_view;

pub use character::{CharacterPage, CharacterRecord, PageInfo, GENDER_MALE, STATUS_ALIVE};
pub use list_view::ListView;
