//! SVG card rendering.
//!
//! Pure string templating: the same render model always produces
//! byte-identical markup. No clock, randomness, or I/O in here.

pub mod card;
pub mod error_card;

pub use card::render;
pub use error_card::render_error;

/// Card canvas width in pixels.
pub(crate) const CANVAS_WIDTH: u32 = 410;
/// Card canvas height in pixels.
pub(crate) const CANVAS_HEIGHT: u32 = 190;
/// Corner radius of the card background.
pub(crate) const CANVAS_RADIUS: u32 = 10;
/// Card background fill.
pub(crate) const BACKGROUND: &str = "#1a1c1f";
/// Card border stroke.
pub(crate) const BORDER: &str = "#30363d";

/// Default theme font stack.
pub(crate) const FONT_DEFAULT: &str = "'Segoe UI', Ubuntu, Helvetica, Arial, sans-serif";
/// Alternate theme font stack.
pub(crate) const FONT_ALT: &str = "'Courier New', Courier, monospace";

/// Text size for a theme: the alternate theme scales every size down by a
/// fixed factor; positions never change.
pub(crate) fn font_size(base: u32, theme: pcard_entity::Theme) -> u32 {
    match theme {
        pcard_entity::Theme::Default => base,
        pcard_entity::Theme::Alt => base * 85 / 100,
    }
}

/// Font family for a theme.
pub(crate) fn font_family(theme: pcard_entity::Theme) -> &'static str {
    match theme {
        pcard_entity::Theme::Default => FONT_DEFAULT,
        pcard_entity::Theme::Alt => FONT_ALT,
    }
}
