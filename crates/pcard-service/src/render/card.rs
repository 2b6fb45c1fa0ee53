//! The success-path card template.

use pcard_entity::RenderModel;

use super::{
    BACKGROUND, BORDER, CANVAS_HEIGHT, CANVAS_RADIUS, CANVAS_WIDTH, font_family, font_size,
};

// Avatar geometry.
const AVATAR_X: u32 = 25;
const AVATAR_Y: u32 = 45;
const AVATAR_SIZE: u32 = 80;
const AVATAR_CX: u32 = AVATAR_X + AVATAR_SIZE / 2;
const AVATAR_CY: u32 = AVATAR_Y + AVATAR_SIZE / 2;
const AVATAR_R: u32 = AVATAR_SIZE / 2;
const STATUS_CX: u32 = AVATAR_X + AVATAR_SIZE - 10;
const STATUS_CY: u32 = AVATAR_Y + AVATAR_SIZE - 10;
const STATUS_R: u32 = 10;

// Text column.
const TEXT_X: u32 = 125;
const CUSTOM_STATUS_Y: u32 = 44;
// The name block sits higher when no custom-status line renders above it.
const NAME_Y_PLAIN: u32 = 52;
const NAME_Y_SHIFTED: u32 = 72;
const HANDLE_OFFSET: u32 = 20;

// Headline activity block.
const OTHER_NAME_Y: u32 = 122;
const OTHER_DETAILS_Y: u32 = 140;
const OTHER_STATE_Y: u32 = 156;

// Music block.
const MUSIC_Y: u32 = 176;
const MUSIC_ICON_CX: u32 = TEXT_X + 5;
const MUSIC_ICON_CY: u32 = MUSIC_Y - 4;
const MUSIC_ICON_R: u32 = 5;
const MUSIC_TEXT_X: u32 = TEXT_X + 16;

// Palette.
const TEXT_PRIMARY: &str = "#ffffff";
const TEXT_SECONDARY: &str = "#b9bbbe";
const TEXT_DIM: &str = "#72767d";
const MUSIC_ICON_COLOR: &str = "#1db954";

/// Render the card for an already-escaped, already-selected model.
///
/// Pure: identical input yields byte-identical output.
pub fn render(model: &RenderModel) -> String {
    let family = font_family(model.theme);
    let mut svg = String::with_capacity(4096);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CANVAS_WIDTH}" height="{CANVAS_HEIGHT}" viewBox="0 0 {CANVAS_WIDTH} {CANVAS_HEIGHT}">"#
    ));
    svg.push_str(&format!(
        r#"<rect width="{CANVAS_WIDTH}" height="{CANVAS_HEIGHT}" rx="{CANVAS_RADIUS}" fill="{BACKGROUND}" stroke="{BORDER}" stroke-width="1"/>"#
    ));

    // Avatar with circular clip; omitted entirely when no blob resolved.
    if !model.avatar_blob.is_empty() {
        svg.push_str(&format!(
            r#"<defs><clipPath id="avatar-clip"><circle cx="{AVATAR_CX}" cy="{AVATAR_CY}" r="{AVATAR_R}"/></clipPath></defs>"#
        ));
        svg.push_str(&format!(
            r#"<image x="{AVATAR_X}" y="{AVATAR_Y}" width="{AVATAR_SIZE}" height="{AVATAR_SIZE}" clip-path="url(#avatar-clip)" href="{}"/>"#,
            model.avatar_blob
        ));
    }

    // Status indicator over the avatar's lower right.
    svg.push_str(&format!(
        r#"<circle cx="{STATUS_CX}" cy="{STATUS_CY}" r="{STATUS_R}" fill="{}" stroke="{BACKGROUND}" stroke-width="4"/>"#,
        model.status_color
    ));

    // Custom status line, and the name/handle block below it. The name
    // block drops down when the custom status occupies its usual slot.
    let name_y = if model.custom_status.is_some() {
        NAME_Y_SHIFTED
    } else {
        NAME_Y_PLAIN
    };

    if let Some(custom) = &model.custom_status {
        svg.push_str(&text_element(
            TEXT_X,
            CUSTOM_STATUS_Y,
            font_size(13, model.theme),
            TEXT_SECONDARY,
            family,
            "italic",
            custom,
        ));
    }

    svg.push_str(&text_element(
        TEXT_X,
        name_y,
        font_size(18, model.theme),
        TEXT_PRIMARY,
        family,
        "bold",
        &model.display_name,
    ));
    svg.push_str(&text_element(
        TEXT_X,
        name_y + HANDLE_OFFSET,
        font_size(13, model.theme),
        TEXT_DIM,
        family,
        "normal",
        &model.handle_text,
    ));

    // Headline activity: up to three stacked lines; the state line moves
    // up into the details slot when there is no details line.
    if let Some(other) = &model.other {
        svg.push_str(&text_element(
            TEXT_X,
            OTHER_NAME_Y,
            font_size(14, model.theme),
            TEXT_PRIMARY,
            family,
            "bold",
            &other.name,
        ));

        let mut line_y = OTHER_DETAILS_Y;
        if let Some(details) = &other.details {
            svg.push_str(&text_element(
                TEXT_X,
                line_y,
                font_size(12, model.theme),
                TEXT_SECONDARY,
                family,
                "normal",
                details,
            ));
            line_y = OTHER_STATE_Y;
        }
        if let Some(state) = &other.state {
            svg.push_str(&text_element(
                TEXT_X,
                line_y,
                font_size(12, model.theme),
                TEXT_SECONDARY,
                family,
                "normal",
                state,
            ));
        }
    }

    // Music block: icon, label, and the title - artist line.
    if let Some(music) = &model.music {
        svg.push_str(&format!(
            r#"<circle cx="{MUSIC_ICON_CX}" cy="{MUSIC_ICON_CY}" r="{MUSIC_ICON_R}" fill="{MUSIC_ICON_COLOR}"/>"#
        ));
        svg.push_str(&format!(
            r#"<text x="{MUSIC_TEXT_X}" y="{MUSIC_Y}" font-family="{family}" font-size="{}" fill="{TEXT_PRIMARY}"><tspan fill="{TEXT_DIM}">Listening to </tspan>{} - {}</text>"#,
            font_size(13, model.theme),
            music.title,
            music.artist
        ));
    }

    svg.push_str("</svg>");
    svg
}

fn text_element(
    x: u32,
    y: u32,
    size: u32,
    fill: &str,
    family: &str,
    style: &str,
    content: &str,
) -> String {
    let style_attr = match style {
        "bold" => r#" font-weight="bold""#.to_string(),
        "italic" => r#" font-style="italic""#.to_string(),
        _ => String::new(),
    };
    format!(
        r#"<text x="{x}" y="{y}" font-family="{family}" font-size="{size}" fill="{fill}"{style_attr}>{content}</text>"#
    )
}
