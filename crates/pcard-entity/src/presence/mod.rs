//! Presence domain entities.

pub mod activity;
pub mod model;
pub mod status;
pub mod user;

pub use activity::{ActivityEntry, ActivityKind};
pub use model::ResolvedPresence;
pub use status::PresenceStatus;
pub use user::{AvatarRef, PresenceUser};
