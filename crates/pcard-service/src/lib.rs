//! # pcard-service
//!
//! Business logic for the presence card service: the upstream source
//! chain, activity selection, avatar fetching, text sanitization, and the
//! SVG card renderer, orchestrated by [`card::CardService`].

pub mod avatar;
pub mod card;
pub mod render;
pub mod select;
pub mod sources;
pub mod text;

pub use card::{CardOutput, CardService};
pub use sources::{PresenceResolver, PresenceSource};
