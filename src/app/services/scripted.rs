//! # Scripted Character Source
//!
//! In-memory [`CharacterSource`] that replays a fixed script of answers and
//! counts how often it was asked. Used by tests and demos that must not touch
//! the network.

use super::character_source::{CharacterSource, FetchError};
use crate::app::models::CharacterRecord;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// One scripted answer
#[derive(Debug, Clone)]
pub enum ScriptedResponse {
    Page(Vec<CharacterRecord>),
    /// Fail with the given HTTP status
    Failure(u16),
}

/// Replays answers in order; the last answer repeats once the script runs dry
pub struct ScriptedCharacterSource {
    script: Mutex<VecDeque<ScriptedResponse>>,
    last: Mutex<Option<ScriptedResponse>>,
    calls: AtomicUsize,
}

impl ScriptedCharacterSource {
    pub fn new(responses: Vec<ScriptedResponse>) -> Self {
        Self {
            script: Mutex::new(responses.into_iter().collect()),
            last: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    /// Source that always answers with the same page
    pub fn always(page: Vec<CharacterRecord>) -> Self {
        Self::new(vec![ScriptedResponse::Page(page)])
    }

    /// Number of `fetch_page` calls so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next_response(&self) -> Option<ScriptedResponse> {
        let mut script = self.script.lock().ok()?;
        let mut last = self.last.lock().ok()?;
        if let Some(response) = script.pop_front() {
            *last = Some(response);
        }
        last.clone()
    }
}

#[async_trait]
impl CharacterSource for ScriptedCharacterSource {
    async fn fetch_page(&self) -> Result<Vec<CharacterRecord>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.next_response() {
            Some(ScriptedResponse::Page(page)) => Ok(page),
            Some(ScriptedResponse::Failure(status)) => Err(FetchError::Status {
                url: self.describe(),
                status,
            }),
            None => Ok(Vec::new()),
        }
    }

    fn describe(&self) -> String {
        "scripted".to_string()
    }
}
