//! # HTTP Character Source
//!
//! Fetches the character page with reqwest and decodes it with serde_json.

use super::character_source::{CharacterSource, FetchError};
use crate::app::models::{CharacterPage, CharacterRecord};
use crate::config::SourceConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;

/// [`CharacterSource`] backed by a single `GET` against the catalog endpoint
#[derive(Debug, Clone)]
pub struct HttpCharacterSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCharacterSource {
    /// Build the underlying client from the profile's source settings
    pub fn new(config: &SourceConfig) -> Result<Self> {
        tracing::debug!("Creating HttpCharacterSource for {}", config.endpoint);

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CharacterSource for HttpCharacterSource {
    async fn fetch_page(&self) -> Result<Vec<CharacterRecord>, FetchError> {
        let url = self.endpoint.clone();
        let start_time = std::time::Instant::now();

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Network {
                url: url.clone(),
                source,
            })?;

        let page: CharacterPage =
            serde_json::from_str(&body).map_err(|source| FetchError::Decode {
                url: url.clone(),
                source,
            })?;

        tracing::debug!(
            "Fetched {} characters from {} in {}ms",
            page.results.len(),
            url,
            start_time.elapsed().as_millis()
        );

        Ok(page.results)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}
