//! Process-wide settings, read once from the environment at startup.
//!
//! - `OPENAI_API_KEY`: trimmed; unset or blank switches the requester to placeholder mode.
//! - `OPENAI_MODEL` (default `gpt-4o-mini`)
//! - `OPENAI_BASE_URL`: optional OpenAI-compatible endpoint.
//! - `REFINERY_ADDR` (default `127.0.0.1:8000`)

use std::fmt;
use std::sync::Arc;

use crate::llm::{ChatOpenAI, CompletionClient};
use crate::requester::CompletionRequester;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";

#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: Option<String>,
    pub listen_addr: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_model: DEFAULT_MODEL.to_string(),
            openai_base_url: None,
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "<redacted>"))
            .field("openai_model", &self.openai_model)
            .field("openai_base_url", &self.openai_base_url)
            .field("listen_addr", &self.listen_addr)
            .finish()
    }
}

impl Settings {
    /// Builds settings from the process environment, falling back to [`Default`] for unset or blank values.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Settings::from_env`] with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let default = Self::default();
        Self {
            openai_api_key: non_blank("OPENAI_API_KEY"),
            openai_model: non_blank("OPENAI_MODEL").unwrap_or(default.openai_model),
            openai_base_url: non_blank("OPENAI_BASE_URL"),
            listen_addr: non_blank("REFINERY_ADDR").unwrap_or(default.listen_addr),
        }
    }

    /// OpenAI client when a key is configured.
    pub fn completion_client(&self) -> Option<Arc<dyn CompletionClient>> {
        self.openai_api_key.as_deref().map(|key| {
            Arc::new(ChatOpenAI::new(
                key,
                self.openai_model.clone(),
                self.openai_base_url.as_deref(),
            )) as Arc<dyn CompletionClient>
        })
    }

    pub fn requester(&self) -> CompletionRequester {
        CompletionRequester::new(self.completion_client())
    }
}
