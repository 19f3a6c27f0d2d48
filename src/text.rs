//! Text rasterization onto fixed-size transparent canvases.

use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};

/// Render `text` onto a transparent canvas of exactly `shape`.
///
/// Glyphs are laid out from the canvas origin with the baseline at the
/// font ascent, matching a top-left text anchor. Glyph coverage becomes
/// the alpha of `ink`, so the result pastes cleanly with itself as the
/// mask. Text wider than the canvas clips silently; the fixed label
/// geometry depends on the canvas never growing to fit.
pub fn render(
    font: &Font<'_>,
    text: &str,
    font_size: f32,
    shape: (u32, u32),
    ink: Rgba<u8>,
) -> RgbaImage {
    let (width, height) = shape;
    let mut img = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));

    let scale = Scale::uniform(font_size);
    let ascent = font.v_metrics(scale).ascent;

    for glyph in font.layout(text, scale, point(0.0, ascent)) {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, coverage| {
                let px = bb.min.x + gx as i32;
                let py = bb.min.y + gy as i32;
                if px < 0 || py < 0 || px as u32 >= width || py as u32 >= height {
                    return;
                }
                let alpha = (coverage * ink.0[3] as f32).round() as u8;
                if alpha > 0 {
                    let shaded = Rgba([ink.0[0], ink.0[1], ink.0[2], alpha]);
                    img.put_pixel(px as u32, py as u32, shaded);
                }
            });
        }
    }

    img
}
