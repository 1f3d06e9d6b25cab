/// Caption rasterization
///
/// Flattens the background picture and both caption strings into a single
/// RGBA buffer. Text is drawn centered, stroke first then fill; the stroke
/// is painted by re-drawing the text at every integer offset within the
/// stroke radius. Font and stroke sizes scale with the background width so
/// captions keep their proportions across image sizes.

use ab_glyph::{FontVec, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};

use crate::state::style::StyleSpec;

/// Width at which StyleSpec sizes are specified verbatim
pub const REFERENCE_WIDTH: f32 = 480.0;

/// Caption inset from the top/bottom edge, as a fraction of image height
const VERTICAL_MARGIN: f32 = 0.04;

/// Edge length of the canvas used when no picture is loaded
const BLANK_CANVAS_SIZE: u32 = 1024;

/// The stand-in background when no picture has been loaded yet
pub fn blank_canvas() -> RgbaImage {
    RgbaImage::from_pixel(
        BLANK_CANVAS_SIZE,
        BLANK_CANVAS_SIZE,
        Rgba([225, 225, 225, 255]),
    )
}

/// Render the background with both captions overlaid.
///
/// Empty caption strings are skipped; everything else, placeholders
/// included, is drawn exactly as displayed. The output always has the
/// background's dimensions.
pub fn compose(
    background: &RgbaImage,
    top_text: &str,
    bottom_text: &str,
    style: &StyleSpec,
    font: &FontVec,
) -> RgbaImage {
    let mut canvas = background.clone();

    let size_factor = canvas.width() as f32 / REFERENCE_WIDTH;
    let scale = PxScale::from((style.font_size * size_factor).max(12.0));
    let stroke = ((style.stroke_width as f32 * size_factor).round() as i32).max(1);
    let margin = (canvas.height() as f32 * VERTICAL_MARGIN).round() as i32;

    // Top caption sits just below the top edge
    draw_caption(&mut canvas, top_text, margin, scale, stroke, style, font);

    // Bottom caption sits just above the bottom edge
    if !bottom_text.is_empty() {
        let (_, text_height) = text_size(scale, font, bottom_text);
        let y = canvas.height() as i32 - margin - text_height as i32;
        draw_caption(&mut canvas, bottom_text, y, scale, stroke, style, font);
    }

    canvas
}

/// Draw one caption centered horizontally at the given baseline-top y
fn draw_caption(
    canvas: &mut RgbaImage,
    text: &str,
    y: i32,
    scale: PxScale,
    stroke: i32,
    style: &StyleSpec,
    font: &FontVec,
) {
    if text.is_empty() {
        return;
    }

    let (text_width, _) = text_size(scale, font, text);
    let x = (canvas.width() as i32 - text_width as i32) / 2;

    // Stroke pass: the text repeated at every offset inside the radius
    for dx in -stroke..=stroke {
        for dy in -stroke..=stroke {
            if dx == 0 && dy == 0 {
                continue;
            }
            if dx * dx + dy * dy > stroke * stroke {
                continue;
            }
            draw_text_mut(canvas, Rgba(style.stroke), x + dx, y + dy, scale, font, text);
        }
    }

    // Fill pass on top
    draw_text_mut(canvas, Rgba(style.fill), x, y, scale, font, text);
}
