//! Text overlay: HUD labels stamped with a fixed-width bitmap font.

use log::trace;

use crate::canvas::Canvas;
use crate::font::{Font5x7, GlyphFont};
use crate::types::Label;

/// Draw `label` with the built-in [`Font5x7`].
pub fn draw_label(canvas: &mut Canvas, label: &Label) {
    draw_label_with(canvas, label, &Font5x7);
}

/// Draw `label` left to right from its baseline anchor using `font`.
///
/// Only foreground glyph pixels are written. Pixels that fall off the canvas
/// are skipped, so labels may sit partly outside the frame. No wrapping.
pub fn draw_label_with(canvas: &mut Canvas, label: &Label, font: &dyn GlyphFont) {
    let top = label.y as i64 - font.ascent() as i64;
    let advance = font.advance() as i64;
    let mut pen_x = label.x as i64;
    let mut written = 0usize;

    for ch in label.text.chars() {
        if pen_x >= canvas.width() as i64 {
            break;
        }
        if pen_x + advance > 0 {
            let glyph = font.rasterize_glyph(ch);
            for (gx, gy) in glyph.lit() {
                if canvas.put_clipped(pen_x + gx as i64, top + gy as i64, label.color) {
                    written += 1;
                }
            }
        }
        pen_x += advance;
    }

    trace!(
        "label {:?} at ({}, {}): {} pixels",
        label.text,
        label.x,
        label.y,
        written
    );
}
