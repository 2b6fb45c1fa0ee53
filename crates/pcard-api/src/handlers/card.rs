//! Card rendering handler.

use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use pcard_entity::Theme;
use pcard_service::card;

use crate::state::AppState;

/// Maximum length of a provider snowflake id.
const MAX_USER_ID_LEN: usize = 32;

/// Query parameters for the card endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CardQuery {
    /// Optional theme selector (`theme=alt`).
    #[serde(default)]
    pub theme: Option<String>,
}

/// GET /api/card/{user_id}
///
/// Always responds 200 with SVG content: embeds must receive an image
/// even when the pipeline fails, so failures render the error card
/// rather than an HTTP error.
pub async fn get_card(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<CardQuery>,
) -> Response {
    let theme = Theme::from_query(query.theme.as_deref());

    let output = if is_valid_user_id(&user_id) {
        state.card_service.build_card(&user_id, theme).await
    } else {
        tracing::debug!(user_id, "Rejected malformed user id");
        card::error_card("Invalid user id")
    };

    let cache_control = if output.is_error {
        // Error cards are never worth caching.
        "no-store, no-cache, must-revalidate".to_string()
    } else {
        state.config.cache.cache_control()
    };

    (
        [
            (header::CONTENT_TYPE, "image/svg+xml; charset=utf-8".to_string()),
            (header::CACHE_CONTROL, cache_control),
        ],
        output.svg,
    )
        .into_response()
}

/// Provider ids are numeric snowflakes; anything else is rejected before
/// it reaches an upstream.
fn is_valid_user_id(user_id: &str) -> bool {
    !user_id.is_empty()
        && user_id.len() <= MAX_USER_ID_LEN
        && user_id.bytes().all(|b| b.is_ascii_digit())
}
