//! # Character List Application
//!
//! MVVM layers of the character browser. Each submodule is one layer; the
//! commonly used types are re-exported here.

pub mod commands;
pub mod controllers;
pub mod events;
pub mod io;
pub mod models;
pub mod services;
pub mod utils;
pub mod view_models;
pub mod views;

// Re-export core types
pub use controllers::{run_plain, AppController};
pub use events::ViewEvent;
pub use models::{CharacterPage, CharacterRecord, ListView, PageInfo};
pub use services::{CharacterSource, FetchError, HttpCharacterSource};
pub use view_models::{CharacterListController, FetchOutcome, ViewModel};
pub use views::{TerminalRenderer, ViewRenderer};

// Re-export specific items from commands to avoid conflicts
pub use commands::{Command, CommandContext, CommandEvent, CommandRegistry};
