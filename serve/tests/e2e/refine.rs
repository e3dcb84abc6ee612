use std::sync::Arc;

use refinery::{CompletionError, CompletionRequester, MockCompletion};

use super::common;

#[tokio::test]
async fn e2e_refine_blank_fields_without_key() {
    let server = common::spawn_unconfigured().await;

    let (status, body) = common::post_refine(
        &server,
        &[
            ("mode", "refine"),
            ("original_prompt", ""),
            ("goal", ""),
            ("audience", ""),
            ("tone", "playful"),
            ("constraints", ""),
        ],
    )
    .await;

    assert_eq!(status, 200);
    assert!(body.contains("OpenAI is not configured."));
    assert!(body.contains("Use a playful, light tone"));
    assert!(body.contains("general"));
    assert!(body.contains("[Paste your base prompt here]"));
    assert!(body.contains(" UTC</p>"), "timestamp missing");
}

#[tokio::test]
async fn e2e_generate_with_partial_fields_without_key() {
    let server = common::spawn_unconfigured().await;

    let (status, body) = common::post_refine(
        &server,
        &[("mode", "generate"), ("goal", "learn chess"), ("tone", "professional")],
    )
    .await;

    assert_eq!(status, 200);
    assert!(body.contains("learn chess"));
    assert!(body.contains("crisp, professional tone"));
    assert!(body.contains("<option value=\"generate\" selected>"));
}

#[tokio::test]
async fn e2e_refine_shows_trimmed_completion() {
    let mock = Arc::new(MockCompletion::with_reply("\n You are a patient chess coach. \n"));
    let server = common::spawn_server(CompletionRequester::new(Some(mock.clone()))).await;

    let (status, body) = common::post_refine(
        &server,
        &[("mode", "refine"), ("original_prompt", "teach me chess")],
    )
    .await;

    assert_eq!(status, 200);
    assert!(body.contains("<pre>You are a patient chess coach.</pre>"));
    assert_eq!(mock.call_count(), 1);
    let sent = mock.last_request().unwrap();
    assert!(sent.user.ends_with("Original prompt:\nteach me chess"));
}

#[tokio::test]
async fn e2e_refine_failure_is_rendered_not_raised() {
    let mock = Arc::new(MockCompletion::with_error(CompletionError::Auth(
        "Incorrect API key provided".to_string(),
    )));
    let server = common::spawn_server(CompletionRequester::new(Some(mock))).await;

    let (status, body) = common::post_refine(&server, &[("mode", "generate")]).await;

    assert_eq!(status, 200);
    assert!(body.contains("OpenAI request failed."));
    assert!(body.contains("authentication rejected: Incorrect API key provided"));
    assert!(body.contains("[Describe the outcome you want to achieve]"));
}

#[tokio::test]
async fn e2e_refine_escapes_echoed_input() {
    let server = common::spawn_unconfigured().await;

    let (_, body) = common::post_refine(
        &server,
        &[("mode", "refine"), ("original_prompt", "<img src=x onerror=alert(1)>")],
    )
    .await;

    assert!(!body.contains("<img src=x"));
    assert!(body.contains("&lt;img src=x onerror=alert(1)&gt;"));
}

#[tokio::test]
async fn e2e_refine_repeated_field_keeps_last_value() {
    let server = common::spawn_unconfigured().await;

    let (status, body) = common::post_refine_raw(
        &server,
        Some("application/x-www-form-urlencoded"),
        "mode=refine&tone=playful&tone=friendly",
    )
    .await;

    assert_eq!(status, 200);
    assert!(body.contains("Use a warm, friendly tone"));
    assert!(!body.contains("Use a playful, light tone"));
    assert!(body.contains("<option value=\"friendly\" selected>"));
}

#[tokio::test]
async fn e2e_refine_accepts_multipart() {
    let server = common::spawn_unconfigured().await;

    let (status, body) = common::post_refine_multipart(
        &server,
        &[("mode", "generate"), ("goal", "learn chess"), ("tone", "playful")],
    )
    .await;

    assert_eq!(status, 200);
    assert!(body.contains("OpenAI is not configured."));
    assert!(body.contains("Goal: learn chess"));
    assert!(body.contains("Use a playful, light tone"));
}

#[tokio::test]
async fn e2e_refine_without_content_type_is_not_rejected() {
    let server = common::spawn_unconfigured().await;

    let (status, body) = common::post_refine_raw(&server, None, "mode=refine&audience=teachers").await;

    assert_eq!(status, 200);
    assert!(body.contains("Audience: teachers."));
}
