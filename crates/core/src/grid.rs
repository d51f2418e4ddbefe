//! Grid rasterizer: arena background and one-pixel separator lines.

use crate::canvas::Canvas;
use crate::types::{Color, GridSpec, Rect, RenderError};

/// Draw one-pixel grid lines over the `spec` arena.
///
/// Lines are anchored on the right/bottom pixel of every cell, so a 10 px
/// grid gets vertical lines at x = 9, 19, 29, ... The final column and row
/// are stamped explicitly as well, which matters only when the canvas is not
/// a whole number of cells wide.
pub fn draw_grid(canvas: &mut Canvas, spec: GridSpec, line: Color) -> Result<(), RenderError> {
    let width = spec.pixel_width();
    let height = spec.pixel_height();
    let size = spec.cell_size();
    check_arena(canvas, spec)?;

    for x in (0..width).filter(|x| (x + 1) % size == 0) {
        vertical_line(canvas, x, height, line)?;
    }
    vertical_line(canvas, width - 1, height, line)?;

    for y in (0..height).filter(|y| (y + 1) % size == 0) {
        horizontal_line(canvas, y, width, line)?;
    }
    horizontal_line(canvas, height - 1, width, line)?;

    Ok(())
}

/// Fill the arena with `background`, then draw its grid lines.
pub fn draw_arena(
    canvas: &mut Canvas,
    spec: GridSpec,
    background: Color,
    line: Color,
) -> Result<(), RenderError> {
    check_arena(canvas, spec)?;
    canvas.fill_rect(Rect::sized(spec.pixel_width(), spec.pixel_height()), background)?;
    draw_grid(canvas, spec, line)
}

fn check_arena(canvas: &Canvas, spec: GridSpec) -> Result<(), RenderError> {
    if Rect::sized(spec.pixel_width(), spec.pixel_height())
        .fits_within(canvas.width(), canvas.height())
    {
        Ok(())
    } else {
        Err(RenderError::OutOfBounds {
            x: spec.pixel_width() as u64,
            y: spec.pixel_height() as u64,
            width: canvas.width(),
            height: canvas.height(),
        })
    }
}

fn vertical_line(canvas: &mut Canvas, x: u32, height: u32, color: Color) -> Result<(), RenderError> {
    canvas.fill_rect(Rect::new(x, 0, 1, height), color)
}

fn horizontal_line(canvas: &mut Canvas, y: u32, width: u32, color: Color) -> Result<(), RenderError> {
    canvas.fill_rect(Rect::new(0, y, width, 1), color)
}
