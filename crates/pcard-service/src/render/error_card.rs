//! The error card template.
//!
//! Rendered whenever the success path cannot proceed. Same canvas size as
//! the normal card so embeds do not jump around, visually distinct via
//! the red border and centered message.

use crate::text::escape;

use super::{BACKGROUND, CANVAS_HEIGHT, CANVAS_RADIUS, CANVAS_WIDTH, FONT_DEFAULT};

const ERROR_BORDER: &str = "#f04747";
const MESSAGE_FILL: &str = "#f04747";

/// Render a fixed-size error card with a single centered message line.
/// Pure, like [`super::render`].
pub fn render_error(message: &str) -> String {
    let message = escape(Some(message));
    let center_x = CANVAS_WIDTH / 2;
    let center_y = CANVAS_HEIGHT / 2 + 5;

    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            r#"<rect width="{w}" height="{h}" rx="{rx}" fill="{bg}" stroke="{border}" stroke-width="2"/>"#,
            r#"<text x="{cx}" y="{cy}" text-anchor="middle" font-family="{family}" font-size="14" fill="{fill}">{message}</text>"#,
            "</svg>"
        ),
        w = CANVAS_WIDTH,
        h = CANVAS_HEIGHT,
        rx = CANVAS_RADIUS,
        bg = BACKGROUND,
        border = ERROR_BORDER,
        cx = center_x,
        cy = center_y,
        family = FONT_DEFAULT,
        fill = MESSAGE_FILL,
        message = message
    )
}
