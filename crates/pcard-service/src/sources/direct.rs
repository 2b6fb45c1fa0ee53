//! Direct provider user-lookup source.
//!
//! Last-resort fallback using a privileged bot credential. The user
//! endpoint only exposes identity fields, so the resolved presence is
//! identity-only: status offline, no activities. The source is only
//! constructed when a token is configured; the token is passed in
//! explicitly, never read from the environment here.

use async_trait::async_trait;
use serde::Deserialize;

use pcard_core::error::AppError;
use pcard_core::result::AppResult;
use pcard_entity::{AvatarRef, PresenceUser, ResolvedPresence};

use super::PresenceSource;

/// Queries the provider's REST user endpoint with a bot token.
#[derive(Clone)]
pub struct DirectLookupSource {
    http: reqwest::Client,
    api_base: String,
    token: String,
}

impl std::fmt::Debug for DirectLookupSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The token stays out of debug output.
        f.debug_struct("DirectLookupSource")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct RawApiUser {
    id: String,
    username: String,
    #[serde(default)]
    global_name: Option<String>,
    #[serde(default)]
    avatar: Option<String>,
}

impl DirectLookupSource {
    /// Create a source for the given API base and privileged token.
    pub fn new(http: reqwest::Client, api_base: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http,
            api_base: api_base.into(),
            token: token.into(),
        }
    }
}

#[async_trait]
impl PresenceSource for DirectLookupSource {
    fn name(&self) -> &str {
        "direct"
    }

    async fn resolve(&self, user_id: &str) -> AppResult<ResolvedPresence> {
        let url = format!("{}/users/{}", self.api_base, user_id);
        let response = self
            .http
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, format!("Bot {}", self.token))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::not_found(format!("Unknown user {user_id}")));
        }
        if !response.status().is_success() {
            return Err(AppError::external_service(format!(
                "User lookup returned {}",
                response.status()
            )));
        }

        let user: RawApiUser = response
            .json()
            .await
            .map_err(|e| AppError::serialization(format!("User lookup body: {e}")))?;

        let avatar = match user.avatar {
            Some(hash) => AvatarRef::CdnHash(hash),
            None => AvatarRef::None,
        };

        Ok(ResolvedPresence::identity_only(PresenceUser {
            id: user.id,
            username: user.username,
            display_name: user.global_name,
            avatar,
        }))
    }
}
