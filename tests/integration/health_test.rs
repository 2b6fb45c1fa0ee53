//! Health endpoint tests.

use http::StatusCode;

use crate::helpers::{TestApp, dead_cdn, spawn_stub};

#[tokio::test]
async fn health_endpoint_reports_success() {
    let cdn = spawn_stub(dead_cdn()).await;
    let app = TestApp::new("http://127.0.0.1:9/presence", None, &cdn);

    let (status, content_type, body) = app.get_text("/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("application/json"));

    let parsed: serde_json::Value = serde_json::from_str(&body).expect("Health body is not JSON");
    assert_eq!(parsed["success"], true);
}

#[tokio::test]
async fn unknown_route_returns_a_json_not_found() {
    let cdn = spawn_stub(dead_cdn()).await;
    let app = TestApp::new("http://127.0.0.1:9/presence", None, &cdn);

    let (status, content_type, body) = app.get_text("/api/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(content_type.starts_with("application/json"));

    let parsed: serde_json::Value = serde_json::from_str(&body).expect("404 body is not JSON");
    assert_eq!(parsed["error"], "NOT_FOUND");
}
