//! Presence user identity model.

use serde::{Deserialize, Serialize};

/// How a user's avatar is referenced by the source that resolved it.
///
/// Sources disagree on what they hand back: the custom endpoint returns a
/// ready-to-use URL, the aggregation service returns a CDN hash that needs
/// URL construction, and a source may already hold an embeddable data URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvatarRef {
    /// A URL that can be fetched directly.
    Url(String),
    /// An embeddable `data:` URI, no fetch needed.
    Data(String),
    /// A CDN avatar hash; the final URL is constructed from the CDN base,
    /// the user id, and this hash.
    CdnHash(String),
    /// No avatar reference at all.
    None,
}

/// Identity fields of the resolved user. Immutable once resolved for a
/// single request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenceUser {
    /// Provider user id (snowflake, kept as a string).
    pub id: String,
    /// Account handle.
    pub username: String,
    /// Display name; falls back to the username at render time.
    pub display_name: Option<String>,
    /// Avatar reference as reported by the source.
    pub avatar: AvatarRef,
}

impl PresenceUser {
    /// The name shown as the card headline.
    pub fn display_or_username(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }

    /// The numeric index of the provider's default avatar for this user,
    /// derived from the snowflake. Unparseable ids map to index 0.
    pub fn default_avatar_index(&self) -> u64 {
        self.id.parse::<u64>().map(|id| (id >> 22) % 6).unwrap_or(0)
    }
}
