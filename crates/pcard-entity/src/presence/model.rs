//! Resolved presence value object.

use serde::{Deserialize, Serialize};

use super::activity::ActivityEntry;
use super::status::PresenceStatus;
use super::user::PresenceUser;

/// The complete presence picture for one request, normalized from exactly
/// one upstream source. Sources are never merged: the first source in the
/// priority chain that succeeds supplies every field here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedPresence {
    /// Identity fields.
    pub user: PresenceUser,
    /// Online status.
    pub status: PresenceStatus,
    /// Activity entries in original upstream order.
    pub activities: Vec<ActivityEntry>,
}

impl ResolvedPresence {
    /// A presence with identity only: offline, no activities. Used by the
    /// direct-lookup source, which cannot see live status.
    pub fn identity_only(user: PresenceUser) -> Self {
        Self {
            user,
            status: PresenceStatus::Offline,
            activities: Vec::new(),
        }
    }
}
