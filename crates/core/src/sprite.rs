//! Sprite compositor: solid one-cell tiles blitted at grid positions.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::trace;

use crate::canvas::Canvas;
use crate::types::{Color, Rect, RenderError, Tile};

/// Draw `tile` as a solid `cell_size` square at its cell.
///
/// The square fully replaces whatever was under it. A cell outside the
/// canvas fails with [`RenderError::OutOfBounds`] and draws nothing.
pub fn draw_tile(canvas: &mut Canvas, tile: Tile, cell_size: u32) -> Result<(), RenderError> {
    let dest = tile_rect(canvas, tile, cell_size)?;
    let stamp = Canvas::new(cell_size, cell_size, tile.color)?;
    blit_stamp(canvas, &stamp, dest)
}

/// Tile compositor that keeps one stamp per color for the life of a frame.
pub struct SpriteCompositor {
    cell_size: u32,
    stamps: HashMap<Color, Canvas>,
}

impl SpriteCompositor {
    pub fn new(cell_size: u32) -> Self {
        Self {
            cell_size,
            stamps: HashMap::new(),
        }
    }

    /// Number of distinct stamps built so far.
    pub fn stamp_count(&self) -> usize {
        self.stamps.len()
    }

    pub fn draw(&mut self, canvas: &mut Canvas, tile: Tile) -> Result<(), RenderError> {
        let size = self.cell_size;
        let dest = tile_rect(canvas, tile, size)?;
        let stamp = match self.stamps.entry(tile.color) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(Canvas::new(size, size, tile.color)?),
        };
        blit_stamp(canvas, stamp, dest)
    }
}

/// Destination rectangle of `tile`, checked against `canvas` before any
/// stamp is allocated.
fn tile_rect(canvas: &Canvas, tile: Tile, cell_size: u32) -> Result<Rect, RenderError> {
    match tile.cell.pixel_rect(cell_size) {
        Some(rect) if rect.fits_within(canvas.width(), canvas.height()) => Ok(rect),
        _ => Err(RenderError::OutOfBounds {
            x: tile.cell.column as u64 * cell_size as u64,
            y: tile.cell.row as u64 * cell_size as u64,
            width: canvas.width(),
            height: canvas.height(),
        }),
    }
}

fn blit_stamp(canvas: &mut Canvas, stamp: &Canvas, dest: Rect) -> Result<(), RenderError> {
    trace!("tile -> ({}, {}) {}px", dest.x, dest.y, dest.width);
    canvas.blit_rect(dest.x, dest.y, stamp, Rect::sized(dest.width, dest.height))
}
