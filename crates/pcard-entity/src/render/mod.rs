//! Render model entities.

pub mod model;

pub use model::{MusicLine, OtherActivity, RenderModel, SelectedActivities, Theme};
