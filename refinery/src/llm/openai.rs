//! OpenAI Chat Completions client implementing [`CompletionClient`].
//!
//! Sends a system message and a user message in one non-streaming request and reads
//! `choices[0].message.content`. The base URL can point at any OpenAI-compatible service.
//!
//! The client's retry back-off is disabled: every call is exactly one HTTP attempt, and a
//! 429 or 5xx comes back as an error straight away.

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, trace};

use super::{CompletionClient, CompletionError, CompletionRequest};

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// OpenAI-compatible chat-completion client.
pub struct ChatOpenAI {
    client: Client<OpenAIConfig>,
    model: String,
    api_base: String,
}

impl ChatOpenAI {
    /// Builds a client for `model` with an explicit key and optional base URL.
    pub fn new(api_key: &str, model: impl Into<String>, base_url: Option<&str>) -> Self {
        let api_base = base_url
            .map(normalize_api_base)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_base.clone());
        Self {
            client: Client::with_config(config).with_backoff(single_attempt()),
            model: model.into(),
            api_base,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }
}

/// Back-off that gives up before the first retry.
fn single_attempt() -> backoff::ExponentialBackoff {
    backoff::ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build()
}

/// Appends `/v1` unless the base already ends with it; strips trailing slashes.
fn normalize_api_base(base: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    if base.ends_with("/v1") {
        base.to_string()
    } else {
        format!("{}/v1", base)
    }
}

fn classify(err: OpenAIError) -> CompletionError {
    match err {
        OpenAIError::ApiError(api) => CompletionError::from_api(api.r#type.as_deref(), &api.message),
        malformed @ OpenAIError::JSONDeserialize(..) => {
            CompletionError::MalformedResponse(malformed.to_string())
        }
        OpenAIError::InvalidArgument(msg) => CompletionError::Api(msg),
        other => CompletionError::Transport(other.to_string()),
    }
}

#[async_trait]
impl CompletionClient for ChatOpenAI {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let trace_id = uuid::Uuid::new_v4().to_string();
        let messages = vec![
            ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage::from(
                request.system.as_str(),
            )),
            ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage::from(
                request.user.as_str(),
            )),
        ];
        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(self.model.clone())
            .messages(messages)
            .temperature(request.temperature)
            .build()
            .map_err(|e| CompletionError::Api(format!("request build failed: {}", e)))?;

        let url = self.chat_completions_url();
        debug!(
            trace_id = %trace_id,
            url = %url,
            model = %self.model,
            temperature = request.temperature,
            "OpenAI chat create"
        );
        if let Ok(js) = serde_json::to_string_pretty(&chat_request) {
            trace!(trace_id = %trace_id, request = %js, "OpenAI request body");
        }

        let response = self.client.chat().create(chat_request).await.map_err(classify)?;

        if let Ok(js) = serde_json::to_string_pretty(&response) {
            trace!(trace_id = %trace_id, response = %js, "OpenAI response body");
        }

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();
        debug!(trace_id = %trace_id, content_len = content.len(), "OpenAI chat done");
        Ok(content)
    }
}
