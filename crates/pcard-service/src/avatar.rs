//! Avatar fetching and re-encoding.
//!
//! The card embeds the avatar as a `data:` URI so the rendered SVG is
//! self-contained. Fetch failures never surface to the caller; the card
//! simply renders without an avatar.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use pcard_entity::{AvatarRef, PresenceUser};

/// Fetches avatar images and re-encodes them as embeddable data URIs.
#[derive(Debug, Clone)]
pub struct AvatarFetcher {
    http: reqwest::Client,
    cdn_base: String,
}

impl AvatarFetcher {
    /// Create a new avatar fetcher sharing the given HTTP client.
    pub fn new(http: reqwest::Client, cdn_base: impl Into<String>) -> Self {
        Self {
            http,
            cdn_base: cdn_base.into(),
        }
    }

    /// Resolve a user's avatar reference to an embeddable data URI.
    ///
    /// CDN hashes are expanded to the hash URL with the numeric-index
    /// default avatar as the fallback; plain URLs get the same default
    /// fallback. An empty string means "omit the image element".
    pub async fn fetch_for_user(&self, user: &PresenceUser) -> String {
        let default_url = self.default_avatar_url(user);
        match &user.avatar {
            AvatarRef::Data(blob) => blob.clone(),
            AvatarRef::Url(url) => self.fetch_embeddable(url, Some(&default_url)).await,
            AvatarRef::CdnHash(hash) => {
                let url = self.hash_avatar_url(&user.id, hash);
                self.fetch_embeddable(&url, Some(&default_url)).await
            }
            AvatarRef::None => self.fetch_embeddable(&default_url, None).await,
        }
    }

    /// Fetch a URL and wrap the bytes as `data:{content-type};base64,…`.
    ///
    /// Already-embeddable input is returned unchanged without a network
    /// call. On a non-success status or transport error the fallback URL,
    /// if supplied, is tried exactly once; any remaining failure yields an
    /// empty string. Never returns an error.
    pub async fn fetch_embeddable(&self, url: &str, fallback: Option<&str>) -> String {
        if url.starts_with("data:") {
            return url.to_string();
        }

        match self.fetch_once(url).await {
            Some(blob) => blob,
            None => match fallback {
                Some(fallback_url) => match self.fetch_once(fallback_url).await {
                    Some(blob) => blob,
                    None => String::new(),
                },
                None => String::new(),
            },
        }
    }

    async fn fetch_once(&self, url: &str) -> Option<String> {
        let response = match self.http.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!(url, error = %e, "Avatar fetch failed");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!(url, status = %response.status(), "Avatar fetch returned non-success");
            return None;
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("image/png")
            .to_string();

        let bytes = match response.bytes().await {
            Ok(b) => b,
            Err(e) => {
                tracing::debug!(url, error = %e, "Avatar body read failed");
                return None;
            }
        };

        Some(format!(
            "data:{};base64,{}",
            content_type,
            BASE64.encode(&bytes)
        ))
    }

    /// The CDN URL for a hash-based avatar.
    fn hash_avatar_url(&self, user_id: &str, hash: &str) -> String {
        format!("{}/avatars/{}/{}.png?size=256", self.cdn_base, user_id, hash)
    }

    /// The CDN URL for the user's numeric-index default avatar.
    fn default_avatar_url(&self, user: &PresenceUser) -> String {
        format!(
            "{}/embed/avatars/{}.png",
            self.cdn_base,
            user.default_avatar_index()
        )
    }
}
