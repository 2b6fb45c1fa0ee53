//! Aggregation-service presence source.
//!
//! Queries a public Discord-presence aggregation service (Lanyard-shaped
//! API) keyed by user id. A well-formed response with `success: false`
//! means the user is not tracked there; that is a source failure, not a
//! partial success.

use async_trait::async_trait;
use serde::Deserialize;

use pcard_core::error::AppError;
use pcard_core::result::AppResult;
use pcard_entity::{AvatarRef, PresenceStatus, PresenceUser, ResolvedPresence};

use super::raw::{RawActivity, normalize_all};
use super::PresenceSource;

/// Queries the aggregation service.
#[derive(Debug, Clone)]
pub struct AggregateSource {
    http: reqwest::Client,
    base: String,
}

#[derive(Debug, Deserialize)]
struct RawEnvelope {
    success: bool,
    #[serde(default)]
    data: Option<RawData>,
    #[serde(default)]
    error: Option<RawError>,
}

#[derive(Debug, Deserialize)]
struct RawError {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawData {
    discord_user: RawDiscordUser,
    #[serde(default)]
    discord_status: Option<String>,
    #[serde(default)]
    activities: Vec<RawActivity>,
}

#[derive(Debug, Deserialize)]
struct RawDiscordUser {
    id: String,
    username: String,
    #[serde(default)]
    global_name: Option<String>,
    #[serde(default)]
    avatar: Option<String>,
}

impl AggregateSource {
    /// Create a source for the given service base URL.
    pub fn new(http: reqwest::Client, base: impl Into<String>) -> Self {
        Self {
            http,
            base: base.into(),
        }
    }
}

#[async_trait]
impl PresenceSource for AggregateSource {
    fn name(&self) -> &str {
        "aggregate"
    }

    async fn resolve(&self, user_id: &str) -> AppResult<ResolvedPresence> {
        let url = format!("{}/v1/users/{}", self.base, user_id);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::external_service(format!(
                "Aggregation service returned {}",
                response.status()
            )));
        }

        let envelope: RawEnvelope = response
            .json()
            .await
            .map_err(|e| AppError::serialization(format!("Aggregation body: {e}")))?;

        if !envelope.success {
            let message = envelope
                .error
                .and_then(|e| e.message)
                .unwrap_or_else(|| "user not tracked".to_string());
            return Err(AppError::not_found(format!(
                "Aggregation service: {message}"
            )));
        }

        let data = envelope
            .data
            .ok_or_else(|| AppError::serialization("Aggregation response missing data"))?;

        let avatar = match data.discord_user.avatar {
            Some(hash) => AvatarRef::CdnHash(hash),
            None => AvatarRef::None,
        };

        Ok(ResolvedPresence {
            user: PresenceUser {
                id: data.discord_user.id,
                username: data.discord_user.username,
                display_name: data.discord_user.global_name,
                avatar,
            },
            status: PresenceStatus::from_str_or_default(
                data.discord_status.as_deref().unwrap_or(""),
            ),
            activities: normalize_all(data.activities),
        })
    }
}
