use super::common;

#[tokio::test]
async fn e2e_health_returns_ok_status() {
    let server = common::spawn_unconfigured().await;

    let resp = reqwest::get(format!("{}/health", server.base_url)).await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let body: serde_json::Value = serde_json::from_str(&resp.text().await.unwrap()).unwrap();
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}
