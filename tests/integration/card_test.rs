//! End-to-end card endpoint tests.
//!
//! Each test wires the real source chain against stub upstream servers
//! and asserts on the SVG the endpoint returns.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::http::header;
use axum::routing::get;
use http::StatusCode;

use crate::helpers::{TestApp, dead_cdn, fake_png, spawn_stub};

/// Stub router serving a fixed JSON body at the given path.
fn json_stub(path: &str, body: String) -> Router {
    Router::new().route(
        path,
        get(move || {
            let body = body.clone();
            async move { ([(header::CONTENT_TYPE, "application/json")], body) }
        }),
    )
}

/// Stub router that fails every request with 500.
fn failing_stub() -> Router {
    Router::new().fallback(|| async { StatusCode::INTERNAL_SERVER_ERROR })
}

/// CDN stub serving a default avatar at every /embed/avatars/ path.
fn live_cdn() -> Router {
    Router::new().route(
        "/embed/avatars/{index}",
        get(|| async { ([(header::CONTENT_TYPE, "image/png")], fake_png().to_vec()) }),
    )
}

fn custom_body(status: &str, activities: &str) -> String {
    format!(
        r#"{{"user":{{"id":"94490510688792576","username":"phin","global_name":"Phineas","avatar_url":"data:image/png;base64,aGVsbG8="}},"status":"{status}","activities":{activities}}}"#
    )
}

#[tokio::test]
async fn custom_status_card_renders_status_text_and_color() {
    let custom = spawn_stub(json_stub(
        "/presence",
        custom_body("online", r#"[{"type":4,"name":"Custom Status","state":"hello"}]"#),
    ))
    .await;
    let cdn = spawn_stub(dead_cdn()).await;

    let app = TestApp::new(&format!("{custom}/presence"), None, &cdn);
    let (status, content_type, body) = app.get_text("/api/card/94490510688792576").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "image/svg+xml; charset=utf-8");
    assert!(body.contains("hello"));
    assert!(body.contains("#43b581"));
    assert!(body.contains("Phineas"));
    assert!(body.contains("@phin"));
    // A custom-status activity must not leak into the headline or music slots.
    assert!(!body.contains("Listening to"));
}

#[tokio::test]
async fn music_without_artist_falls_back_to_unknown_artist() {
    let custom = spawn_stub(json_stub(
        "/presence",
        custom_body(
            "online",
            r#"[{"type":2,"name":"Spotify","details":"Song<X>"}]"#,
        ),
    ))
    .await;
    let cdn = spawn_stub(dead_cdn()).await;

    let app = TestApp::new(&format!("{custom}/presence"), None, &cdn);
    let (status, _, body) = app.get_text("/api/card/94490510688792576").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Listening to"));
    assert!(body.contains("Song&lt;X&gt; - Unknown Artist"));
}

#[tokio::test]
async fn failed_custom_endpoint_falls_through_to_the_aggregation_service() {
    let custom = spawn_stub(failing_stub()).await;
    let aggregate = spawn_stub(json_stub(
        "/v1/users/94490510688792576",
        r#"{"success":true,"data":{"discord_user":{"id":"94490510688792576","username":"phin","global_name":"Phineas","avatar":null},"discord_status":"idle","activities":[]}}"#
            .to_string(),
    ))
    .await;
    let cdn = spawn_stub(live_cdn()).await;

    let app = TestApp::new(&format!("{custom}/presence"), Some(&aggregate), &cdn);
    let (status, _, body) = app.get_text("/api/card/94490510688792576").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Phineas"));
    // Idle color, and the default avatar fetched from the CDN stub.
    assert!(body.contains("#faa61a"));
    assert!(body.contains("data:image/png;base64,"));
}

#[tokio::test]
async fn all_sources_failing_yields_the_error_card() {
    let custom = spawn_stub(failing_stub()).await;
    let cdn = spawn_stub(dead_cdn()).await;

    let app = TestApp::new(&format!("{custom}/presence"), None, &cdn);
    let response = app.get("/api/card/94490510688792576").await;

    assert_eq!(response.status(), StatusCode::OK);
    let cache_control = response
        .headers()
        .get(header::CACHE_CONTROL)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(cache_control.contains("no-store"));
    // Matches the configured policy: error cards never opt into caching.
    assert_eq!(app.config.cache.mode, "no-store");

    let bytes = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("Failed to read body");
    let body = String::from_utf8_lossy(&bytes);
    assert!(body.contains("Presence endpoint unavailable"));
    assert!(body.contains("#f04747"));
}

#[tokio::test]
async fn untracked_aggregate_user_falls_through_to_the_error_card() {
    let custom = spawn_stub(failing_stub()).await;
    let aggregate = spawn_stub(json_stub(
        "/v1/users/94490510688792576",
        r#"{"success":false,"error":{"code":"user_not_monitored","message":"User is not being monitored"}}"#
            .to_string(),
    ))
    .await;
    let cdn = spawn_stub(dead_cdn()).await;

    let app = TestApp::new(&format!("{custom}/presence"), Some(&aggregate), &cdn);
    let (status, _, body) = app.get_text("/api/card/94490510688792576").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Presence endpoint unavailable"));
}

#[tokio::test]
async fn unparseable_last_source_reports_unreadable_data() {
    let custom = spawn_stub(json_stub("/presence", "not json at all".to_string())).await;
    let cdn = spawn_stub(dead_cdn()).await;

    let app = TestApp::new(&format!("{custom}/presence"), None, &cdn);
    let (status, _, body) = app.get_text("/api/card/94490510688792576").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Presence data unreadable"));
}

#[tokio::test]
async fn malformed_user_id_renders_the_invalid_id_card() {
    // No upstream should even be contacted; a failing stub proves nothing
    // depends on it.
    let custom = spawn_stub(failing_stub()).await;
    let cdn = spawn_stub(dead_cdn()).await;

    let app = TestApp::new(&format!("{custom}/presence"), None, &cdn);
    let (status, content_type, body) = app.get_text("/api/card/not-a-snowflake").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "image/svg+xml; charset=utf-8");
    assert!(body.contains("Invalid user id"));
}

#[tokio::test]
async fn alt_theme_switches_the_font_stack() {
    let custom = spawn_stub(json_stub("/presence", custom_body("dnd", "[]"))).await;
    let cdn = spawn_stub(dead_cdn()).await;

    let app = TestApp::new(&format!("{custom}/presence"), None, &cdn);
    let (_, _, default_body) = app.get_text("/api/card/94490510688792576").await;
    let (_, _, alt_body) = app
        .get_text("/api/card/94490510688792576?theme=alt")
        .await;

    assert!(default_body.contains("Segoe UI"));
    assert!(alt_body.contains("Courier New"));
    assert!(alt_body.contains("#f04747"));
}

#[tokio::test]
async fn avatar_fetch_failure_degrades_to_a_card_without_an_image() {
    // avatar_url points at a URL that 404s, and the default fallback 404s
    // too; the card still renders, just without the image element.
    let cdn = spawn_stub(dead_cdn()).await;
    let body = format!(
        r#"{{"user":{{"id":"94490510688792576","username":"phin","global_name":"Phineas","avatar_url":"{cdn}/broken.png"}},"status":"online","activities":[]}}"#
    );
    let custom = spawn_stub(json_stub("/presence", body)).await;

    let app = TestApp::new(&format!("{custom}/presence"), None, &cdn);
    let (status, _, svg) = app.get_text("/api/card/94490510688792576").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!svg.contains("<image"));
    assert!(svg.contains("Phineas"));
    assert!(svg.contains("#43b581"));
}

#[tokio::test]
async fn avatar_fallback_is_tried_exactly_once() {
    let broken_calls = Arc::new(AtomicUsize::new(0));
    let default_calls = Arc::new(AtomicUsize::new(0));

    let broken = Arc::clone(&broken_calls);
    let fallback = Arc::clone(&default_calls);
    let cdn_router = Router::new()
        .route(
            "/broken.png",
            get(move || {
                let calls = Arc::clone(&broken);
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    StatusCode::NOT_FOUND
                }
            }),
        )
        .route(
            "/embed/avatars/{index}",
            get(move || {
                let calls = Arc::clone(&fallback);
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    ([(header::CONTENT_TYPE, "image/png")], fake_png().to_vec())
                }
            }),
        );
    let cdn = spawn_stub(cdn_router).await;

    let body = format!(
        r#"{{"user":{{"id":"94490510688792576","username":"phin","global_name":"Phineas","avatar_url":"{cdn}/broken.png"}},"status":"online","activities":[]}}"#
    );
    let custom = spawn_stub(json_stub("/presence", body)).await;

    let app = TestApp::new(&format!("{custom}/presence"), None, &cdn);
    let (status, _, svg) = app.get_text("/api/card/94490510688792576").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(broken_calls.load(Ordering::SeqCst), 1);
    assert_eq!(default_calls.load(Ordering::SeqCst), 1);
    assert!(svg.contains("data:image/png;base64,"));
}

#[tokio::test]
async fn successful_custom_endpoint_skips_the_aggregation_service() {
    let aggregate_calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&aggregate_calls);
    let aggregate_router = Router::new().fallback(move || {
        let calls = Arc::clone(&counter);
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    });
    let aggregate = spawn_stub(aggregate_router).await;

    let custom = spawn_stub(json_stub("/presence", custom_body("online", "[]"))).await;
    let cdn = spawn_stub(dead_cdn()).await;

    let app = TestApp::new(&format!("{custom}/presence"), Some(&aggregate), &cdn);
    let (status, _, _) = app.get_text("/api/card/94490510688792576").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(aggregate_calls.load(Ordering::SeqCst), 0);
}
