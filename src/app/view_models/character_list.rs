//! # Character List Controller
//!
//! Owns the list state (characters, loading flag, filter flag), runs the
//! fetch and applies the "Male & Alive" filter.
//!
//! ```text
//!            load()                      completion
//!   Idle ─────────────────▶ Loading ─────────────────▶ Idle (unfiltered)
//!     │                        ▲
//!     │ toggle_filter()        │ toggle_filter()
//!     ▼                        │
//!   Idle (filtered) ───────────┘
//! ```
//!
//! The filter overwrites `characters` in place. Turning it off refetches the
//! page instead of restoring a remembered copy.
//!
//! Each `load()` takes a new request token. Only the completion carrying the
//! newest token is applied; older completions are dropped, and starting a new
//! load aborts the previous fetch task.

use super::filter::male_and_alive;
use crate::app::models::{CharacterRecord, ListView};
use crate::app::services::{CharacterSource, FetchError};
use std::error::Error;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const COMPLETION_CHANNEL_CAPACITY: usize = 10;

/// Result of one fetch task, tagged with the token of the load that spawned it
#[derive(Debug)]
struct FetchCompletion {
    token: u64,
    result: Result<Vec<CharacterRecord>, FetchError>,
}

/// What happened when a completion was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The list was replaced with `count` characters
    Loaded { count: usize },
    /// The fetch failed; the list was left as it was
    Failed,
    /// A newer load was started after this one; nothing changed
    Superseded { token: u64 },
}

pub struct CharacterListController {
    source: Arc<dyn CharacterSource>,
    characters: Vec<CharacterRecord>,
    loading: bool,
    filtered: bool,
    latest_token: u64,
    in_flight: Option<JoinHandle<()>>,
    completion_sender: mpsc::Sender<FetchCompletion>,
    completion_receiver: mpsc::Receiver<FetchCompletion>,
}

impl CharacterListController {
    /// New controller in the Loading state; nothing has been fetched yet.
    pub fn new(source: Arc<dyn CharacterSource>) -> Self {
        let (completion_sender, completion_receiver) = mpsc::channel(COMPLETION_CHANNEL_CAPACITY);
        Self {
            source,
            characters: Vec::new(),
            loading: true,
            filtered: false,
            latest_token: 0,
            in_flight: None,
            completion_sender,
            completion_receiver,
        }
    }

    pub fn characters(&self) -> &[CharacterRecord] {
        &self.characters
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_filtered(&self) -> bool {
        self.filtered
    }

    /// Whether a fetch task is still outstanding
    pub fn has_pending_fetch(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Everything the renderer needs, borrowed
    pub fn view(&self) -> ListView<'_> {
        ListView {
            characters: &self.characters,
            loading: self.loading,
            filter_active: self.filtered,
        }
    }

    /// Start fetching the page.
    ///
    /// Must be called from within a tokio runtime. Does not touch the filter
    /// flag.
    pub fn load(&mut self) {
        self.latest_token += 1;
        let token = self.latest_token;
        self.loading = true;

        if let Some(previous) = self.in_flight.take() {
            tracing::debug!("Aborting fetch superseded by request {}", token);
            previous.abort();
        }

        tracing::debug!("Starting fetch {} from {}", token, self.source.describe());

        let source = Arc::clone(&self.source);
        let sender = self.completion_sender.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let result = source.fetch_page().await;
            // Receiver is gone only when the controller was dropped
            let _ = sender.send(FetchCompletion { token, result }).await;
        }));
    }

    /// Flip between the full page and the male-and-alive subset.
    ///
    /// Turning the filter on works on the resident list. Turning it off
    /// starts a new fetch.
    pub fn toggle_filter(&mut self) {
        if self.filtered {
            tracing::debug!("Resetting filter, refetching page");
            self.load();
            self.filtered = false;
        } else {
            let all = std::mem::take(&mut self.characters);
            let total = all.len();
            self.characters = male_and_alive(all);
            self.filtered = true;
            tracing::debug!(
                "Filter applied: {} of {} characters are male and alive",
                self.characters.len(),
                total
            );
        }
    }

    /// Apply a finished fetch if one is waiting (non-blocking)
    pub fn poll_completion(&mut self) -> Option<FetchOutcome> {
        if let Ok(completion) = self.completion_receiver.try_recv() {
            return Some(self.apply_completion(completion));
        }

        let finished = self.in_flight.as_ref().is_some_and(|task| task.is_finished());
        if !finished {
            return None;
        }
        // The task may have sent right before finishing
        if let Ok(completion) = self.completion_receiver.try_recv() {
            return Some(self.apply_completion(completion));
        }
        tracing::error!("Fetch task {} ended without a result", self.latest_token);
        Some(self.abandon_fetch())
    }

    /// Wait for the next finished fetch and apply it.
    ///
    /// Returns `None` straight away when no fetch is outstanding and nothing
    /// is queued. A fetch task that dies without reporting (panic) counts as
    /// a failed load.
    pub async fn wait_for_completion(&mut self) -> Option<FetchOutcome> {
        let Some(task) = self.in_flight.as_mut() else {
            return self.poll_completion();
        };

        tokio::select! {
            biased;
            completion = self.completion_receiver.recv() => {
                let completion = completion?;
                Some(self.apply_completion(completion))
            }
            joined = task => {
                self.in_flight = None;
                if let Ok(completion) = self.completion_receiver.try_recv() {
                    return Some(self.apply_completion(completion));
                }
                match joined {
                    Err(error) => tracing::error!(
                        "Fetch task {} failed: {}",
                        self.latest_token,
                        error
                    ),
                    Ok(()) => tracing::error!(
                        "Fetch task {} ended without a result",
                        self.latest_token
                    ),
                }
                Some(self.abandon_fetch())
            }
        }
    }

    /// Settle a load whose task is gone: the list stays as it was
    fn abandon_fetch(&mut self) -> FetchOutcome {
        self.in_flight = None;
        self.loading = false;
        FetchOutcome::Failed
    }

    /// Wait until the newest load has been applied.
    ///
    /// Returns the outcome of that load, or `None` if nothing was pending.
    pub async fn settle(&mut self) -> Option<FetchOutcome> {
        let mut last = None;
        while let Some(outcome) = self.wait_for_completion().await {
            let superseded = matches!(outcome, FetchOutcome::Superseded { .. });
            last = Some(outcome);
            if !superseded && !self.has_pending_fetch() {
                break;
            }
        }
        last
    }

    fn apply_completion(&mut self, completion: FetchCompletion) -> FetchOutcome {
        if completion.token != self.latest_token {
            tracing::debug!(
                "Dropping result of fetch {} (latest is {})",
                completion.token,
                self.latest_token
            );
            return FetchOutcome::Superseded {
                token: completion.token,
            };
        }

        self.in_flight = None;
        self.loading = false;

        match completion.result {
            Ok(characters) => {
                let count = characters.len();
                self.characters = characters;
                tracing::info!("Loaded {} characters", count);
                FetchOutcome::Loaded { count }
            }
            Err(error) => {
                let mut message = format!("{error}");
                let mut cause = error.source();
                while let Some(inner) = cause {
                    message.push_str(&format!("\n  Caused by: {inner}"));
                    cause = inner.source();
                }
                tracing::error!("Failed to fetch characters: {message}");
                FetchOutcome::Failed
            }
        }
    }
}

impl Drop for CharacterListController {
    fn drop(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }
}
