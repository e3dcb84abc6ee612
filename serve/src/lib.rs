//! HTTP server for Prompt Refinery (axum).
//!
//! Listens on 127.0.0.1:8000 by default and serves the form page at `/`, form submissions
//! at `/refine`, a liveness probe at `/health` and the stylesheet under `/static`.
//!
//! **Public API**: [`run_serve`], [`run_serve_on_listener`].

mod app;
mod form;
mod page;
mod refine;

use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use refinery::{CompletionRequester, Settings};

use app::{router, AppState};

/// Serves on an existing listener until `shutdown` resolves. Tests bind 127.0.0.1:0, pass
/// the listener with a mock-backed requester and `std::future::pending()`.
pub async fn run_serve_on_listener<F>(
    listener: TcpListener,
    requester: CompletionRequester,
    shutdown: F,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(configured = requester.is_configured(), "HTTP server listening on http://{}", addr);
    let state = Arc::new(AppState { requester });
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Binds `addr` (or `settings.listen_addr`) and serves until Ctrl-C.
pub async fn run_serve(
    settings: &Settings,
    addr: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = addr.unwrap_or(&settings.listen_addr);
    let listener = TcpListener::bind(addr).await?;
    let requester = settings.requester();
    if requester.is_configured() {
        info!(model = %settings.openai_model, "OpenAI completion enabled");
    } else {
        info!("OPENAI_API_KEY not set; results will echo the constructed prompt");
    }
    run_serve_on_listener(listener, requester, async {
        let _ = tokio::signal::ctrl_c().await;
        info!("shutdown signal received");
    })
    .await
}
