//! Shared raw-activity parsing for upstream responses.
//!
//! Upstream activity records carry a numeric type code (provider API,
//! aggregation service) or a string marker (custom endpoint). Both shapes
//! deserialize here and normalize into the canonical [`ActivityEntry`],
//! so the selector only ever sees one shape.

use serde::Deserialize;

use pcard_entity::presence::activity::MUSIC_SERVICE_NAME;
use pcard_entity::{ActivityEntry, ActivityKind};

/// The `type` field of a raw activity: numeric code or string marker.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawActivityType {
    Code(i64),
    Marker(String),
}

/// One activity record as upstreams send it. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawActivity {
    #[serde(rename = "type", default)]
    pub kind: Option<RawActivityType>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
}

impl RawActivity {
    /// Normalize into the canonical entry.
    ///
    /// Music entries that report the song in `details`/`state` (the
    /// aggregation service does) have those copied into `title`/`artist`
    /// so selection reads a single field pair.
    pub fn normalize(self) -> ActivityEntry {
        let kind = match &self.kind {
            Some(RawActivityType::Code(code)) => ActivityKind::from_code(*code),
            Some(RawActivityType::Marker(marker)) => ActivityKind::from_marker(marker),
            None => ActivityKind::Unknown,
        };

        let is_music = self.name.as_deref() == Some(MUSIC_SERVICE_NAME);
        let title = match (&self.title, is_music) {
            (None, true) => self.details.clone(),
            _ => self.title,
        };
        let artist = match (&self.artist, is_music) {
            (None, true) => self.state.clone(),
            _ => self.artist,
        };

        ActivityEntry {
            kind,
            name: self.name,
            details: self.details,
            state: self.state,
            title,
            artist,
        }
    }
}

/// Normalize a whole activity list, preserving upstream order.
pub fn normalize_all(raw: Vec<RawActivity>) -> Vec<ActivityEntry> {
    raw.into_iter().map(RawActivity::normalize).collect()
}
