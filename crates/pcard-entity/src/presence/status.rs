//! Presence status enumeration.

use serde::{Deserialize, Serialize};

/// Online status for a user, as reported by an upstream presence source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceStatus {
    /// User is online.
    Online,
    /// User is idle/away.
    Idle,
    /// User has set Do Not Disturb.
    Dnd,
    /// User is offline or invisible.
    Offline,
}

impl PresenceStatus {
    /// Parses from an upstream status string; unknown or missing values
    /// normalize to `Offline`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "online" => Self::Online,
            "idle" => Self::Idle,
            "dnd" | "do_not_disturb" => Self::Dnd,
            _ => Self::Offline,
        }
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Idle => "idle",
            Self::Dnd => "dnd",
            Self::Offline => "offline",
        }
    }

    /// The indicator color for this status. Always defined; `Offline`
    /// doubles as the fallback color for anything unrecognized.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Online => "#43b581",
            Self::Idle => "#faa61a",
            Self::Dnd => "#f04747",
            Self::Offline => "#747f8d",
        }
    }
}

impl std::fmt::Display for PresenceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
