//! Custom presence endpoint source.
//!
//! Known limitation, preserved on purpose: the endpoint lives at a fixed
//! URL and serves one global presence record regardless of the requested
//! user id. It is effectively a single-operator status feed; the id is
//! accepted and ignored, not interpolated into the URL.

use async_trait::async_trait;
use serde::Deserialize;

use pcard_core::error::AppError;
use pcard_core::result::AppResult;
use pcard_entity::{AvatarRef, PresenceStatus, PresenceUser, ResolvedPresence};

use super::raw::{RawActivity, normalize_all};
use super::PresenceSource;

/// Queries the custom presence endpoint.
#[derive(Debug, Clone)]
pub struct CustomEndpointSource {
    http: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct RawCustomResponse {
    user: RawCustomUser,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    activities: Vec<RawActivity>,
}

#[derive(Debug, Deserialize)]
struct RawCustomUser {
    id: String,
    username: String,
    #[serde(default)]
    global_name: Option<String>,
    #[serde(default)]
    avatar_url: Option<String>,
}

impl CustomEndpointSource {
    /// Create a source for the given fixed endpoint URL.
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl PresenceSource for CustomEndpointSource {
    fn name(&self) -> &str {
        "custom"
    }

    async fn resolve(&self, _user_id: &str) -> AppResult<ResolvedPresence> {
        let response = self.http.get(&self.endpoint).send().await?;

        if !response.status().is_success() {
            return Err(AppError::external_service(format!(
                "Custom endpoint returned {}",
                response.status()
            )));
        }

        let body: RawCustomResponse = response
            .json()
            .await
            .map_err(|e| AppError::serialization(format!("Custom endpoint body: {e}")))?;

        let avatar = match body.user.avatar_url {
            Some(url) if url.starts_with("data:") => AvatarRef::Data(url),
            Some(url) => AvatarRef::Url(url),
            None => AvatarRef::None,
        };

        Ok(ResolvedPresence {
            user: PresenceUser {
                id: body.user.id,
                username: body.user.username,
                display_name: body.user.global_name,
                avatar,
            },
            status: PresenceStatus::from_str_or_default(body.status.as_deref().unwrap_or("")),
            activities: normalize_all(body.activities),
        })
    }
}
