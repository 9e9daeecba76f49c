//! # Plain Mode
//!
//! Fetch once, optionally filter, print and exit. Used with `--plain` and
//! whenever stdout is not a terminal.

use crate::app::services::CharacterSource;
use crate::app::view_models::{CharacterListController, FetchOutcome};
use crate::app::views::render_plain;
use crate::config::AppConfig;
use anyhow::{bail, Result};
use std::io::Write;
use std::sync::Arc;

pub async fn run_plain<W: Write>(
    config: &AppConfig,
    source: Arc<dyn CharacterSource>,
    filter: bool,
    out: &mut W,
) -> Result<()> {
    let mut list = CharacterListController::new(source);
    list.load();

    match list.settle().await {
        Some(FetchOutcome::Loaded { count }) => {
            tracing::debug!("Plain mode received {} characters", count);
        }
        _ => bail!(
            "Failed to fetch characters from {}",
            list.source_description()
        ),
    }

    if filter {
        list.toggle_filter();
    }

    render_plain(out, &list.view(), config.name_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::character::fixtures::{rick, summer};
    use crate::app::services::{ScriptedCharacterSource, ScriptedResponse};

    fn config() -> AppConfig {
        AppConfig::defaults("default", "/tmp/none")
    }

    #[tokio::test]
    async fn plain_mode_should_print_whole_page() {
        let source = Arc::new(ScriptedCharacterSource::always(vec![rick(), summer()]));
        let mut out = Vec::new();

        run_plain(&config(), source, false, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Rick Sanchez"));
        assert!(text.contains("Summer Smith"));
        assert!(text.contains("2 characters"));
    }

    #[tokio::test]
    async fn plain_mode_should_apply_filter_without_refetching() {
        let source = Arc::new(ScriptedCharacterSource::always(vec![rick(), summer()]));
        let mut out = Vec::new();

        run_plain(&config(), source.clone(), true, &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Rick Sanchez"));
        assert!(!text.contains("Summer Smith"));
        assert!(text.contains("1 characters"));
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn plain_mode_should_fail_when_fetch_fails() {
        let source = Arc::new(ScriptedCharacterSource::new(vec![ScriptedResponse::Failure(
            503,
        )]));
        let mut out = Vec::new();

        let err = run_plain(&config(), source, false, &mut out)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("scripted"));
        assert!(out.is_empty());
    }
}
