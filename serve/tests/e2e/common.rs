//! Shared helpers for e2e tests. Received bodies are logged with `[e2e] received: ...`.

use refinery::CompletionRequester;
use tokio::net::TcpListener;

/// Running server; aborted on drop.
pub struct TestServer {
    pub base_url: String,
    handle: tokio::task::JoinHandle<Result<(), Box<dyn std::error::Error + Send + Sync>>>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Binds a random port and serves with the given requester.
pub async fn spawn_server(requester: CompletionRequester) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(serve::run_serve_on_listener(
        listener,
        requester,
        std::future::pending(),
    ));
    TestServer {
        base_url: format!("http://{}", addr),
        handle,
    }
}

/// Server in placeholder mode (no API key).
pub async fn spawn_unconfigured() -> TestServer {
    spawn_server(CompletionRequester::unconfigured()).await
}

/// POSTs form fields to `/refine` and returns (status, body).
pub async fn post_refine(server: &TestServer, fields: &[(&str, &str)]) -> (u16, String) {
    let resp = reqwest::Client::new()
        .post(format!("{}/refine", server.base_url))
        .form(fields)
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap();
    eprintln!("[e2e] received: {}", body);
    (status, body)
}

/// POSTs fields to `/refine` as `multipart/form-data` and returns (status, body).
pub async fn post_refine_multipart(server: &TestServer, fields: &[(&str, &str)]) -> (u16, String) {
    let form = fields
        .iter()
        .fold(reqwest::multipart::Form::new(), |form, (name, value)| {
            form.text(name.to_string(), value.to_string())
        });
    let resp = reqwest::Client::new()
        .post(format!("{}/refine", server.base_url))
        .multipart(form)
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap();
    eprintln!("[e2e] received: {}", body);
    (status, body)
}

/// POSTs a raw body to `/refine` with an optional content type and returns (status, body).
pub async fn post_refine_raw(
    server: &TestServer,
    content_type: Option<&str>,
    body: &'static str,
) -> (u16, String) {
    let mut req = reqwest::Client::new()
        .post(format!("{}/refine", server.base_url))
        .body(body);
    if let Some(ct) = content_type {
        req = req.header("content-type", ct);
    }
    let resp = req.send().await.unwrap();
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap();
    eprintln!("[e2e] received: {}", body);
    (status, body)
}
