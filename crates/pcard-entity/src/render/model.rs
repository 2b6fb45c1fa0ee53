//! The flattened model the card template consumes.

use serde::{Deserialize, Serialize};

/// Card theme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Standard theme.
    #[default]
    Default,
    /// Alternate theme: monospace font family, text sizes reduced by a
    /// fixed factor. Positions are unchanged.
    Alt,
}

impl Theme {
    /// Parses the query-string theme selector; anything unrecognized is
    /// the default theme.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("alt") => Self::Alt,
            _ => Self::Default,
        }
    }
}

/// The music line of the card: `title - artist`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusicLine {
    /// Song title, or the fixed placeholder if the source had none.
    pub title: String,
    /// Artist, or the fixed placeholder if the source had none.
    pub artist: String,
}

/// The headline activity block: up to three stacked lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherActivity {
    /// Activity name (headline line).
    pub name: String,
    /// Detail line.
    pub details: Option<String>,
    /// State line; rendered in the details slot when details is absent.
    pub state: Option<String>,
}

/// Output of the activity selector: at most one entry per rule, text still
/// raw (escaping happens when the render model is built).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectedActivities {
    /// Custom status text, from the entry's `state` field.
    pub custom_status: Option<String>,
    /// Music line.
    pub music: Option<MusicLine>,
    /// Headline activity.
    pub other: Option<OtherActivity>,
}

/// Everything the card template needs, already escaped and selected.
///
/// This is a one-way projection of a resolved presence: constructed once
/// per request, never mutated, discarded with the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderModel {
    /// Escaped display name.
    pub display_name: String,
    /// Escaped handle line (`@username`).
    pub handle_text: String,
    /// Embeddable avatar data URI; empty means "omit the image element".
    pub avatar_blob: String,
    /// Status indicator color, always a defined hex value.
    pub status_color: String,
    /// Escaped custom status line, if one was selected.
    pub custom_status: Option<String>,
    /// Escaped music line, if one was selected.
    pub music: Option<MusicLine>,
    /// Escaped headline activity, if one was selected.
    pub other: Option<OtherActivity>,
    /// Theme flag.
    pub theme: Theme,
}
