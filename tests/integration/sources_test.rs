//! Upstream source mapping tests against stub servers.
//!
//! These drive the sources directly rather than through the router, so
//! the error kinds and projections each source produces are observable
//! before the resolver collapses them.

use axum::Router;
use axum::http::{HeaderMap, header};
use axum::response::IntoResponse;
use axum::routing::get;
use http::StatusCode;

use pcard_core::error::ErrorKind;
use pcard_entity::PresenceStatus;
use pcard_service::PresenceSource;
use pcard_service::sources::{AggregateSource, DirectLookupSource};

use crate::helpers::spawn_stub;

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn untracked_aggregate_user_is_a_source_failure() {
    let router = Router::new().route(
        "/v1/users/{id}",
        get(|| async {
            (
                [(header::CONTENT_TYPE, "application/json")],
                r#"{"success":false,"error":{"code":"user_not_monitored","message":"User is not being monitored"}}"#,
            )
        }),
    );
    let base = spawn_stub(router).await;

    let source = AggregateSource::new(client(), base);
    let err = source.resolve("94490510688792576").await.unwrap_err();

    // A well-formed envelope with success=false is a failure, never a
    // partial success.
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert!(err.message.contains("not being monitored"));
}

#[tokio::test]
async fn direct_lookup_sends_the_bot_token_and_projects_identity_only() {
    let router = Router::new().route(
        "/users/{id}",
        get(|headers: HeaderMap| async move {
            let authorized = headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                == Some("Bot test-token");
            if authorized {
                (
                    [(header::CONTENT_TYPE, "application/json")],
                    r#"{"id":"94490510688792576","username":"phin","global_name":"Phineas","avatar":null}"#,
                )
                    .into_response()
            } else {
                StatusCode::UNAUTHORIZED.into_response()
            }
        }),
    );
    let base = spawn_stub(router).await;

    let source = DirectLookupSource::new(client(), base, "test-token");
    let presence = source.resolve("94490510688792576").await.unwrap();

    // The user endpoint cannot see live presence: identity fields only,
    // offline, no activities.
    assert_eq!(presence.user.username, "phin");
    assert_eq!(presence.user.display_or_username(), "Phineas");
    assert_eq!(presence.status, PresenceStatus::Offline);
    assert!(presence.activities.is_empty());
}

#[tokio::test]
async fn direct_lookup_maps_missing_users_to_not_found() {
    let router = Router::new().route("/users/{id}", get(|| async { StatusCode::NOT_FOUND }));
    let base = spawn_stub(router).await;

    let source = DirectLookupSource::new(client(), base, "test-token");
    let err = source.resolve("1").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn direct_lookup_rejection_is_an_external_service_failure() {
    let router = Router::new().route("/users/{id}", get(|| async { StatusCode::UNAUTHORIZED }));
    let base = spawn_stub(router).await;

    let source = DirectLookupSource::new(client(), base, "wrong-token");
    let err = source.resolve("1").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::ExternalService);
}
