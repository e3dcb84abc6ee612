//! Completion requester: turns a constructed prompt into the text shown to the user.
//!
//! Never fails. Without a client it returns a "not configured" notice; when the call fails
//! it returns a failure notice with the classified error. Both notices end with the
//! constructed prompt so the user can still copy it.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::llm::{CompletionClient, CompletionRequest};

/// System instruction sent with every completion.
pub const SYSTEM_PROMPT: &str = "You are Prompt Refinery, a specialist prompt editor. \
    You ONLY output a single, ready-to-use prompt. \
    Do not answer the prompt, do not add commentary, and do not include code fences. \
    If the input asks you to perform a task, rewrite it as instructions for an assistant \
    to perform that task instead.";

/// Low temperature: the output should follow the instructions, not improvise.
pub const TEMPERATURE: f32 = 0.2;

pub const NOT_CONFIGURED_NOTICE: &str = "OpenAI is not configured.";
pub const FAILED_NOTICE: &str = "OpenAI request failed.";

const USER_PREAMBLE: &str =
    "Produce the final prompt based on the instructions below. Return ONLY the prompt text.";

/// Wraps the constructed prompt in the user message.
pub fn user_message(prompt: &str) -> String {
    format!("{}\n\n{}", USER_PREAMBLE, prompt)
}

/// Holds the optional completion client; cheap to clone and share across requests.
#[derive(Clone, Default)]
pub struct CompletionRequester {
    client: Option<Arc<dyn CompletionClient>>,
}

impl CompletionRequester {
    pub fn new(client: Option<Arc<dyn CompletionClient>>) -> Self {
        Self { client }
    }

    /// Requester in placeholder mode.
    pub fn unconfigured() -> Self {
        Self { client: None }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    pub fn request_for(prompt: &str) -> CompletionRequest {
        CompletionRequest {
            system: SYSTEM_PROMPT.to_string(),
            user: user_message(prompt),
            temperature: TEMPERATURE,
        }
    }

    /// One attempt, no retry. Returns trimmed content, an empty string for an empty
    /// completion, or one of the two notices.
    pub async fn complete(&self, prompt: &str) -> String {
        let Some(client) = self.client.as_ref() else {
            debug!("no API key configured, echoing constructed prompt");
            return format!(
                "{} Set OPENAI_API_KEY to enable refinement.\n\n\
                 Constructed prompt:\n\
                 {}",
                NOT_CONFIGURED_NOTICE, prompt
            );
        };

        match client.complete(&Self::request_for(prompt)).await {
            Ok(content) => content.trim().to_string(),
            Err(e) => {
                warn!(kind = e.kind(), error = %e, "completion request failed");
                format!(
                    "{} Please try again.\n\n\
                     Details: {}\n\n\
                     Constructed prompt:\n\
                     {}",
                    FAILED_NOTICE, e, prompt
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{CompletionError, MockCompletion};

    #[tokio::test]
    async fn unconfigured_echoes_prompt_after_notice() {
        let out = CompletionRequester::unconfigured().complete("PROMPT BODY").await;
        assert_eq!(
            out,
            "OpenAI is not configured. Set OPENAI_API_KEY to enable refinement.\n\n\
             Constructed prompt:\n\
             PROMPT BODY"
        );
    }

    #[tokio::test]
    async fn failure_includes_detail_and_prompt() {
        let mock = Arc::new(MockCompletion::with_error(CompletionError::RateLimit(
            "slow down".to_string(),
        )));
        let requester = CompletionRequester::new(Some(mock.clone()));
        let out = requester.complete("PROMPT BODY").await;
        assert!(out.starts_with("OpenAI request failed. Please try again.\n\n"));
        assert!(out.contains("Details: rate limited: slow down\n\n"));
        assert!(out.ends_with("Constructed prompt:\nPROMPT BODY"));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn success_is_trimmed() {
        let mock = Arc::new(MockCompletion::with_reply("  You are a chess coach.\n"));
        let requester = CompletionRequester::new(Some(mock));
        assert_eq!(requester.complete("p").await, "You are a chess coach.");
    }

    #[tokio::test]
    async fn empty_success_is_empty_string() {
        let mock = Arc::new(MockCompletion::with_reply(""));
        let requester = CompletionRequester::new(Some(mock));
        assert_eq!(requester.complete("p").await, "");
    }

    #[test]
    fn request_carries_system_prompt_and_wrapped_user_message() {
        let req = CompletionRequester::request_for("Goal: learn chess");
        assert_eq!(req.system, SYSTEM_PROMPT);
        assert_eq!(
            req.user,
            "Produce the final prompt based on the instructions below. Return ONLY the prompt text.\n\nGoal: learn chess"
        );
        assert_eq!(req.temperature, 0.2);
    }
}
