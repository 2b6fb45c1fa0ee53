//! Card building orchestration.
//!
//! One sequential pipeline per request: resolve presence, select
//! activities, escape text and fetch the avatar, render. Every failure
//! category is recovered here; `build_card` never returns an error, only
//! a success card or an error card.

use std::sync::Arc;
use std::time::Duration;

use pcard_core::config::upstream::UpstreamConfig;
use pcard_core::error::{AppError, ErrorKind};
use pcard_core::result::AppResult;
use pcard_entity::{MusicLine, OtherActivity, RenderModel, ResolvedPresence, Theme};

use crate::avatar::AvatarFetcher;
use crate::render;
use crate::select;
use crate::sources::{
    AggregateSource, CustomEndpointSource, DirectLookupSource, PresenceResolver, PresenceSource,
};
use crate::text::escape;

/// A rendered card plus whether it is the error variant. The markup is
/// always valid SVG either way.
#[derive(Debug, Clone)]
pub struct CardOutput {
    /// The SVG document.
    pub svg: String,
    /// True when this is the error card.
    pub is_error: bool,
}

/// Builds presence cards end to end.
#[derive(Debug, Clone)]
pub struct CardService {
    resolver: PresenceResolver,
    avatar_fetcher: AvatarFetcher,
}

impl CardService {
    /// Create a card service from explicit collaborators.
    pub fn new(resolver: PresenceResolver, avatar_fetcher: AvatarFetcher) -> Self {
        Self {
            resolver,
            avatar_fetcher,
        }
    }

    /// Wire the standard source chain from configuration: custom endpoint
    /// first, then the aggregation service if enabled, then the direct
    /// lookup if a token is configured.
    pub fn from_config(config: &UpstreamConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| AppError::configuration(format!("HTTP client build failed: {e}")))?;

        let mut sources: Vec<Arc<dyn PresenceSource>> = vec![Arc::new(CustomEndpointSource::new(
            http.clone(),
            config.custom_endpoint.clone(),
        ))];

        if config.aggregate_enabled {
            sources.push(Arc::new(AggregateSource::new(
                http.clone(),
                config.aggregate_base.clone(),
            )));
        }

        if let Some(token) = &config.bot_token {
            sources.push(Arc::new(DirectLookupSource::new(
                http.clone(),
                config.api_base.clone(),
                token.clone(),
            )));
        }

        Ok(Self::new(
            PresenceResolver::new(sources),
            AvatarFetcher::new(http, config.cdn_base.clone()),
        ))
    }

    /// Build the card for a user. Resolution failures become the error
    /// card; avatar failures degrade silently to a card without an
    /// avatar. Never fails.
    pub async fn build_card(&self, user_id: &str, theme: Theme) -> CardOutput {
        let presence = match self.resolver.resolve(user_id).await {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(user_id, error = %e, "Presence resolution failed");
                return CardOutput {
                    svg: render::render_error(error_message(&e)),
                    is_error: true,
                };
            }
        };

        let avatar_blob = self.avatar_fetcher.fetch_for_user(&presence.user).await;
        let model = build_render_model(&presence, avatar_blob, theme);

        CardOutput {
            svg: render::render(&model),
            is_error: false,
        }
    }
}

/// Project a resolved presence onto the flat, escaped render model.
pub fn build_render_model(
    presence: &ResolvedPresence,
    avatar_blob: String,
    theme: Theme,
) -> RenderModel {
    let selected = select::select(&presence.activities);

    RenderModel {
        display_name: escape(Some(presence.user.display_or_username())),
        handle_text: format!("@{}", escape(Some(&presence.user.username))),
        avatar_blob,
        status_color: presence.status.color().to_string(),
        custom_status: selected.custom_status.as_deref().map(|s| escape(Some(s))),
        music: selected.music.map(|m| MusicLine {
            title: escape(Some(&m.title)),
            artist: escape(Some(&m.artist)),
        }),
        other: selected.other.map(|o| OtherActivity {
            name: escape(Some(&o.name)),
            details: o.details.as_deref().map(|d| escape(Some(d))),
            state: o.state.as_deref().map(|s| escape(Some(s))),
        }),
        theme,
    }
}

/// The fixed, human-readable message for each failure category.
fn error_message(error: &AppError) -> &'static str {
    match error.kind {
        ErrorKind::Serialization => "Presence data unreadable",
        ErrorKind::NotFound => "User not found",
        ErrorKind::Validation => "Invalid user id",
        ErrorKind::ServiceUnavailable | ErrorKind::ExternalService => {
            "Presence endpoint unavailable"
        }
        _ => "Presence unavailable",
    }
}

/// Render the error card directly, for callers that fail before reaching
/// the pipeline (e.g. path validation in the handler).
pub fn error_card(message: &str) -> CardOutput {
    CardOutput {
        svg: render::render_error(message),
        is_error: true,
    }
}
