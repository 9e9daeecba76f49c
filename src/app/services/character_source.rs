//! # Character Source
//!
//! The capability the list controller fetches from. Production code uses
//! [`HttpCharacterSource`](super::HttpCharacterSource); tests plug in a
//! scripted source.

use crate::app::models::CharacterRecord;
use async_trait::async_trait;
use thiserror::Error;

/// Why a page could not be fetched
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure, including timeouts
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    /// The body was not a character page
    #[error("could not decode character page from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// HTTP status code, when the failure was a status failure
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, FetchError::Decode { .. })
    }
}

/// Provider of the fixed first page of characters.
///
/// An empty page is `Ok(vec![])`, never an error.
#[async_trait]
pub trait CharacterSource: Send + Sync {
    async fn fetch_page(&self) -> Result<Vec<CharacterRecord>, FetchError>;

    /// Where the page comes from, for logs and the status bar
    fn describe(&self) -> String;
}
