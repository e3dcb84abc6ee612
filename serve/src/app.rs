//! Axum app: shared state, router and the small fixed-response handlers.

use axum::{
    http::header,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use refinery::CompletionRequester;

use super::page::{render_page, PageView};
use super::refine::refine_handler;

const STYLESHEET: &str = include_str!("../static/style.css");

/// Shared state: the immutable completion requester built at startup.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) requester: CompletionRequester,
}

pub(crate) fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/refine", post(refine_handler))
        .route("/health", get(health_handler))
        .route("/static/style.css", get(stylesheet_handler))
        .with_state(state)
}

/// `GET /`: empty form.
async fn index_handler() -> Html<String> {
    Html(render_page(&PageView::empty()))
}

/// `GET /health`: fixed liveness payload.
async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn stylesheet_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}
