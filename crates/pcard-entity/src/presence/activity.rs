//! Activity entries reported alongside a presence status.
//!
//! Upstream activity records are weakly typed: different sources populate
//! different field subsets, and absent fields must never be an error. The
//! entry stays a loose record; classification happens through the explicit
//! predicates below, never by shape-sniffing.

use serde::{Deserialize, Serialize};

/// The provider name that marks a music-listening activity.
pub const MUSIC_SERVICE_NAME: &str = "Spotify";

/// Kind of activity, from the provider's numeric type codes or the custom
/// endpoint's string markers. Anything unrecognized is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// Playing a game.
    Playing,
    /// Live streaming.
    Streaming,
    /// Listening to music.
    Listening,
    /// Watching something.
    Watching,
    /// A manually set custom status.
    Custom,
    /// Competing in an event.
    Competing,
    /// Unrecognized or missing type marker.
    Unknown,
}

impl ActivityKind {
    /// Maps the provider's numeric activity type code.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Playing,
            1 => Self::Streaming,
            2 => Self::Listening,
            3 => Self::Watching,
            4 => Self::Custom,
            5 => Self::Competing,
            _ => Self::Unknown,
        }
    }

    /// Maps a string type marker ("custom", "playing", ...).
    pub fn from_marker(marker: &str) -> Self {
        match marker.to_lowercase().as_str() {
            "playing" => Self::Playing,
            "streaming" => Self::Streaming,
            "listening" => Self::Listening,
            "watching" => Self::Watching,
            "custom" | "custom_status" => Self::Custom,
            "competing" => Self::Competing,
            _ => Self::Unknown,
        }
    }
}

/// One normalized activity entry. All text fields are optional; sources
/// fill whatever subset they have.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Classified activity kind.
    #[serde(default)]
    pub kind: ActivityKind,
    /// Activity or application name.
    pub name: Option<String>,
    /// Detail line (e.g. what is being played).
    pub details: Option<String>,
    /// State line (e.g. party info, or the custom status text).
    pub state: Option<String>,
    /// Song title for music entries.
    pub title: Option<String>,
    /// Artist for music entries.
    pub artist: Option<String>,
}

impl Default for ActivityKind {
    fn default() -> Self {
        Self::Unknown
    }
}

impl ActivityEntry {
    /// Whether this entry is a manually set custom status.
    pub fn is_custom_status(&self) -> bool {
        self.kind == ActivityKind::Custom
    }

    /// Whether this entry is a music-listening activity, by exact name
    /// match against the known music service.
    pub fn is_music(&self) -> bool {
        self.name.as_deref() == Some(MUSIC_SERVICE_NAME)
    }
}
