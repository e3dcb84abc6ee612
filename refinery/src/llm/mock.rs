//! Mock completion client for tests and offline runs.
//!
//! Returns a fixed reply or a fixed error, counts calls and keeps the last request so
//! tests can assert on what would have been sent.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{CompletionClient, CompletionError, CompletionRequest};

/// Mock client: fixed outcome for every call.
pub struct MockCompletion {
    outcome: Result<String, CompletionError>,
    calls: AtomicUsize,
    last_request: Mutex<Option<CompletionRequest>>,
}

impl MockCompletion {
    /// Every call succeeds with `content`.
    pub fn with_reply(content: impl Into<String>) -> Self {
        Self::with_outcome(Ok(content.into()))
    }

    /// Every call fails with `error`.
    pub fn with_error(error: CompletionError) -> Self {
        Self::with_outcome(Err(error))
    }

    fn with_outcome(outcome: Result<String, CompletionError>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl CompletionClient for MockCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_request.lock() {
            *guard = Some(request.clone());
        }
        self.outcome.clone()
    }
}
