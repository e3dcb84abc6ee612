//! Chat-completion client abstraction.
//!
//! The requester depends on a callable that takes a system instruction plus one user
//! message and returns the assistant text; this module defines the trait, the
//! OpenAI-compatible implementation and a mock for tests.

mod mock;
mod openai;

pub use mock::MockCompletion;
pub use openai::ChatOpenAI;

use async_trait::async_trait;
use thiserror::Error;

/// One chat-completion call: system instruction, user message, sampling temperature.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
}

/// Why an outbound completion call failed.
///
/// Display text is shown to end users, so each variant states the category first and
/// keeps the upstream detail short.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompletionError {
    /// Missing, invalid or revoked API key.
    #[error("authentication rejected: {0}")]
    Auth(String),
    /// Rate limit or quota exhausted.
    #[error("rate limited: {0}")]
    RateLimit(String),
    /// Connection, TLS or other transport failure before a response was read.
    #[error("could not reach the completion service: {0}")]
    Transport(String),
    /// The service answered with a body we could not parse.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    /// Any other error reported by the API (bad model name, invalid request, ...).
    #[error("API error: {0}")]
    Api(String),
}

impl CompletionError {
    /// Short stable name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Auth(_) => "auth",
            Self::RateLimit(_) => "rate_limit",
            Self::Transport(_) => "transport",
            Self::MalformedResponse(_) => "malformed_response",
            Self::Api(_) => "api",
        }
    }

    /// Sorts an API-reported error by its `type` field and message.
    pub fn from_api(error_type: Option<&str>, message: &str) -> Self {
        let kind = error_type.unwrap_or_default().to_ascii_lowercase();
        let lower = message.to_ascii_lowercase();
        if kind.contains("authentication")
            || kind.contains("permission")
            || lower.contains("api key")
            || lower.contains("unauthorized")
        {
            Self::Auth(message.to_string())
        } else if kind.contains("rate_limit")
            || kind.contains("insufficient_quota")
            || kind == "requests"
            || lower.contains("rate limit")
            || lower.contains("quota")
        {
            Self::RateLimit(message.to_string())
        } else {
            Self::Api(message.to_string())
        }
    }
}

/// Chat-completion client: one request in, assistant text out.
///
/// Returns the first choice's content, or an empty string when the service answered
/// without choices or without content. Implementations: [`ChatOpenAI`], [`MockCompletion`].
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}
