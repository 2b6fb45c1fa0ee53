//! Shared test helpers for integration tests.
//!
//! Upstream presence sources and the avatar CDN are stubbed with small
//! axum servers bound on loopback, so tests exercise the real resolver
//! and fetcher without leaving the machine.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, Response, StatusCode};
use tower::ServiceExt;

use pcard_api::state::AppState;
use pcard_core::config::AppConfig;
use pcard_service::CardService;

/// Serve a stub router on an ephemeral loopback port; returns its base URL.
pub async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Stub has no local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Stub server failed");
    });

    format!("http://{addr}")
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a test application with upstreams pointed at stub URLs.
    ///
    /// `aggregate_base = None` disables the aggregation fallback, and no
    /// bot token is ever configured, so the chain is fully local.
    pub fn new(custom_endpoint: &str, aggregate_base: Option<&str>, cdn_base: &str) -> Self {
        let mut config = AppConfig::default();
        config.upstream.custom_endpoint = custom_endpoint.to_string();
        config.upstream.aggregate_enabled = aggregate_base.is_some();
        if let Some(base) = aggregate_base {
            config.upstream.aggregate_base = base.to_string();
        }
        config.upstream.bot_token = None;
        config.upstream.cdn_base = cdn_base.to_string();
        config.upstream.request_timeout_seconds = 5;

        let card_service =
            CardService::from_config(&config.upstream).expect("Failed to build card service");

        let state = AppState {
            config: Arc::new(config.clone()),
            card_service: Arc::new(card_service),
        };

        Self {
            router: pcard_api::build_router(state),
            config,
        }
    }

    /// Issue a GET request against the app and return the raw response.
    pub async fn get(&self, path: &str) -> Response<Body> {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .uri(path)
                    .body(Body::empty())
                    .expect("Failed to build request"),
            )
            .await
            .expect("Request failed")
    }

    /// Issue a GET request and return status, content type, and body text.
    pub async fn get_text(&self, path: &str) -> (StatusCode, String, String) {
        let response = self.get(path).await;
        let status = response.status();
        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let bytes = axum::body::to_bytes(response.into_body(), 1 << 20)
            .await
            .expect("Failed to read body");
        (status, content_type, String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// A stub CDN router where every avatar path 404s.
pub fn dead_cdn() -> Router {
    Router::new().fallback(|| async { StatusCode::NOT_FOUND })
}

/// A tiny PNG-ish payload for stub avatar responses. Content only needs
/// to round-trip through base64, not decode as an image.
pub fn fake_png() -> &'static [u8] {
    b"\x89PNG\r\n\x1a\nfakepixels"
}
