//! FrameAssembler: turns a [`Scene`] into a finished [`Canvas`].
//!
//! This module is pure (no I/O). It can be unit-tested.

use log::debug;

use crate::canvas::Canvas;
use crate::font::{Font5x7, GlyphFont};
use crate::grid::draw_arena;
use crate::sprite::SpriteCompositor;
use crate::text::draw_label_with;
use crate::types::{RenderError, Scene};

/// Renders scenes with a fixed glyph font.
pub struct FrameAssembler {
    font: Box<dyn GlyphFont>,
}

impl Default for FrameAssembler {
    fn default() -> Self {
        Self::new(Font5x7)
    }
}

impl FrameAssembler {
    pub fn new(font: impl GlyphFont + 'static) -> Self {
        Self {
            font: Box::new(font),
        }
    }

    /// Render one frame.
    ///
    /// Draw order is fill, arena and grid lines, tiles in scene order, then
    /// labels in scene order. Any failure discards the canvas, so callers
    /// never see a half-drawn frame.
    pub fn render(&self, scene: &Scene) -> Result<Canvas, RenderError> {
        let grid = scene.grid;
        let mut canvas = Canvas::new(grid.pixel_width(), grid.pixel_height(), scene.fill)?;

        draw_arena(&mut canvas, grid, scene.background, scene.grid_line)?;

        let mut sprites = SpriteCompositor::new(grid.cell_size());
        for tile in &scene.tiles {
            sprites.draw(&mut canvas, *tile)?;
        }

        for label in &scene.labels {
            draw_label_with(&mut canvas, label, self.font.as_ref());
        }

        debug!(
            "rendered {}x{} frame: {} tiles ({} stamps), {} labels",
            canvas.width(),
            canvas.height(),
            scene.tiles.len(),
            sprites.stamp_count(),
            scene.labels.len()
        );
        Ok(canvas)
    }
}

/// Render `scene` with the default font.
pub fn render(scene: &Scene) -> Result<Canvas, RenderError> {
    FrameAssembler::default().render(scene)
}
