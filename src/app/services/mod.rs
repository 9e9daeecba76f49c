//! # Services Layer
//!
//! Access to the outside world. The list controller only knows the
//! [`CharacterSource`] trait; concrete sources live here.

pub mod character_source;
pub mod http;
pub mod scripted;

pub use character_source::{CharacterSource, FetchError};
pub use http::HttpCharacterSource;
pub use scripted::{ScriptedCharacterSource, ScriptedResponse};
