//! # pcard-entity
//!
//! Domain models for the presence card service. Every struct in this crate
//! is a value object: presence data normalized from one upstream source,
//! or the flattened render model the card template consumes. All entities
//! derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod presence;
pub mod render;

pub use presence::{
    ActivityEntry, ActivityKind, AvatarRef, PresenceStatus, PresenceUser, ResolvedPresence,
};
pub use render::{MusicLine, OtherActivity, RenderModel, SelectedActivities, Theme};
