use super::common;

#[tokio::test]
async fn e2e_index_renders_empty_form() {
    let server = common::spawn_unconfigured().await;

    let resp = reqwest::get(format!("{}/", server.base_url)).await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"), "content-type: {}", content_type);
    let body = resp.text().await.unwrap();
    assert!(body.contains("action=\"/refine\""));
    assert!(!body.contains("class=\"result\""));
}

#[tokio::test]
async fn e2e_stylesheet_is_served_as_css() {
    let server = common::spawn_unconfigured().await;

    let resp = reqwest::get(format!("{}/static/style.css", server.base_url))
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/css"));
    assert!(resp.text().await.unwrap().contains(".result"));
}
