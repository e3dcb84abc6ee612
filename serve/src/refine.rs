//! `POST /refine`: form → prompt → completion → rendered page.

use axum::{extract::State, response::Html};
use std::sync::Arc;
use tracing::{info, info_span, Instrument};

use refinery::{build_prompt, PromptInputs};

use super::app::AppState;
use super::form::SubmittedForm;
use super::page::{render_page, PageView};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Never rejects input: every field is optional and the requester never fails, so the
/// response is always the page with a result section.
pub(crate) async fn refine_handler(
    State(state): State<Arc<AppState>>,
    SubmittedForm(form): SubmittedForm,
) -> Html<String> {
    let inputs = PromptInputs::from(form);
    let span = info_span!(
        "refine",
        request_id = %uuid::Uuid::new_v4(),
        mode = inputs.mode.as_str(),
        tone = inputs.tone.as_str()
    );
    async move {
        let prompt = build_prompt(&inputs);
        let result = state.requester.complete(&prompt).await;
        info!(prompt_len = prompt.len(), result_len = result.len(), "refine done");
        let timestamp = chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string();
        Html(render_page(&PageView {
            inputs: Some(&inputs),
            result: Some(&result),
            timestamp: Some(timestamp),
        }))
    }
    .instrument(span)
    .await
}
