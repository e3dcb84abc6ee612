//! # Prompt Refinery
//!
//! Turns a handful of form fields into an instructional prompt and asks a chat-completion
//! model to produce the final, ready-to-use prompt from it.
//!
//! ## Main modules
//!
//! - [`prompt`]: [`PromptForm`], [`PromptInputs`], [`Mode`], [`Tone`] and the two prompt
//!   builders ([`build_refined_prompt`], [`build_generated_prompt`]).
//! - [`llm`]: [`CompletionClient`] trait, OpenAI-compatible [`ChatOpenAI`], [`MockCompletion`]
//!   and the classified [`CompletionError`].
//! - [`requester`]: [`CompletionRequester`] — one outbound call per request, with a
//!   placeholder result when no API key is configured and a failure notice on error.
//! - [`settings`]: [`Settings`] read once from the environment at startup.
//!
//! Without `OPENAI_API_KEY` everything still works: the requester echoes the constructed
//! prompt behind a "not configured" notice.

pub mod llm;
pub mod prompt;
pub mod requester;
pub mod settings;

pub use llm::{
    ChatOpenAI, CompletionClient, CompletionError, CompletionRequest, MockCompletion,
};
pub use prompt::{
    build_generated_prompt, build_prompt, build_refined_prompt, tone_guidance, Mode,
    PromptForm, PromptInputs, Tone,
};
pub use requester::{
    CompletionRequester, FAILED_NOTICE, NOT_CONFIGURED_NOTICE, SYSTEM_PROMPT, TEMPERATURE,
};
pub use settings::{Settings, DEFAULT_LISTEN_ADDR, DEFAULT_MODEL};
