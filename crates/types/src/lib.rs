//! Core types module - shared data structures and constants
//!
//! This crate defines the plain data that flows through the frame pipeline.
//! It has no rendering logic of its own, so the same types can describe a
//! scene loaded from JSON, one built by game code, or one built in a test.
//!
//! # Coordinates
//!
//! Two coordinate spaces are used throughout:
//!
//! - **Grid space**: a [`Cell`] is a `(row, column)` pair, 0-indexed from the
//!   top-left of the arena.
//! - **Pixel space**: `(x, y)` pairs, 0-indexed from the top-left of the canvas.
//!
//! [`Cell::pixel_rect`] links the two: cell `(r, c)` covers the pixel
//! rectangle `[c*size, (c+1)*size) x [r*size, (r+1)*size)`.
//!
//! # Default Layout
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WINDOW_WIDTH` | 800 | Default frame width in pixels |
//! | `WINDOW_HEIGHT` | 600 | Default frame height in pixels |
//! | `CELL_SIZE` | 25 | Default cell edge in pixels |
//! | `HUD_MARGIN` | 10 | Distance of HUD baselines from the bottom edge |
//!
//! # Examples
//!
//! ```
//! use snake_frame_types::{Cell, Color, GridSpec, CELL_SIZE, WINDOW_HEIGHT, WINDOW_WIDTH};
//!
//! let grid = GridSpec::for_window(WINDOW_WIDTH, WINDOW_HEIGHT, CELL_SIZE).unwrap();
//! assert_eq!(grid.rows(), 24);
//! assert_eq!(grid.columns(), 32);
//! assert_eq!(grid.pixel_width(), 800);
//!
//! let rect = Cell::new(1, 2).pixel_rect(grid.cell_size()).unwrap();
//! assert_eq!((rect.x, rect.y), (50, 25));
//!
//! assert_eq!(Color::rgb(255, 0, 0), Color::RED);
//! ```

use serde::{Deserialize, Serialize};

mod error;

pub use error::RenderError;

/// Default frame width in pixels.
pub const WINDOW_WIDTH: u32 = 800;

/// Default frame height in pixels.
pub const WINDOW_HEIGHT: u32 = 600;

/// Default cell edge length in pixels.
pub const CELL_SIZE: u32 = 25;

/// HUD labels sit this many pixels above the bottom edge.
pub const HUD_MARGIN: i32 = 10;

/// An RGBA color with 8-bit components.
///
/// Equality is componentwise. When deserialized, a missing `a` means opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    u8::MAX
}

impl Color {
    pub const MEDIUM_AQUAMARINE: Color = Color::rgb(102, 205, 170);
    pub const TEAL: Color = Color::rgb(0, 128, 128);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Components in `[r, g, b, a]` order, as stored in an RGBA8 raster.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at the origin.
    pub const fn sized(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Exclusive right edge. Widened so huge rectangles cannot wrap.
    pub fn right(&self) -> u64 {
        self.x as u64 + self.width as u64
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u64 {
        self.y as u64 + self.height as u64
    }

    /// True if this rectangle lies entirely inside a `width x height` area.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.right() <= width as u64 && self.bottom() <= height as u64
    }
}

/// One grid-aligned arena position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: u32,
    pub column: u32,
}

impl Cell {
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Pixel rectangle this cell covers with `cell_size` px cells, or `None`
    /// if its origin is not addressable with `u32` coordinates.
    pub fn pixel_rect(self, cell_size: u32) -> Option<Rect> {
        let x = self.column.checked_mul(cell_size)?;
        let y = self.row.checked_mul(cell_size)?;
        Some(Rect::new(x, y, cell_size, cell_size))
    }
}

/// Grid dimensions and cell size.
///
/// The fields are private so every value in circulation has already passed
/// the `> 0` checks; deserialization goes through the same validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GridSpecRepr", into = "GridSpecRepr")]
pub struct GridSpec {
    rows: u32,
    columns: u32,
    cell_size: u32,
}

#[derive(Serialize, Deserialize)]
struct GridSpecRepr {
    rows: u32,
    columns: u32,
    cell_size: u32,
}

impl TryFrom<GridSpecRepr> for GridSpec {
    type Error = RenderError;

    fn try_from(repr: GridSpecRepr) -> Result<Self, Self::Error> {
        GridSpec::new(repr.rows, repr.columns, repr.cell_size)
    }
}

impl From<GridSpec> for GridSpecRepr {
    fn from(spec: GridSpec) -> Self {
        Self {
            rows: spec.rows,
            columns: spec.columns,
            cell_size: spec.cell_size,
        }
    }
}

impl GridSpec {
    /// Validate and build a grid.
    ///
    /// Fails with [`RenderError::InvalidDimension`] if any dimension is zero or
    /// the resulting canvas would not be addressable with `u32` coordinates.
    pub fn new(rows: u32, columns: u32, cell_size: u32) -> Result<Self, RenderError> {
        let width = columns.checked_mul(cell_size);
        let height = rows.checked_mul(cell_size);
        match (width, height) {
            (Some(_), Some(_)) if rows > 0 && columns > 0 && cell_size > 0 => Ok(Self {
                rows,
                columns,
                cell_size,
            }),
            _ => Err(RenderError::InvalidDimension {
                width: width.unwrap_or(u32::MAX),
                height: height.unwrap_or(u32::MAX),
            }),
        }
    }

    /// Derive rows and columns from a window size, truncating partial cells.
    pub fn for_window(width: u32, height: u32, cell_size: u32) -> Result<Self, RenderError> {
        if cell_size == 0 {
            return Err(RenderError::InvalidDimension { width, height });
        }
        Self::new(height / cell_size, width / cell_size, cell_size).map_err(|_| {
            RenderError::InvalidDimension { width, height }
        })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn pixel_width(&self) -> u32 {
        self.columns * self.cell_size
    }

    pub fn pixel_height(&self) -> u32 {
        self.rows * self.cell_size
    }
}

/// One rendered entity occupying exactly one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub cell: Cell,
    pub color: Color,
}

impl Tile {
    pub const fn new(cell: Cell, color: Color) -> Self {
        Self { cell, color }
    }
}

/// HUD text anchored at a baseline point in pixel space.
///
/// Coordinates are signed; text that starts or runs off-canvas is clipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub x: i32,
    pub y: i32,
    pub text: String,
    pub color: Color,
}

impl Label {
    pub fn new(x: i32, y: i32, text: impl Into<String>, color: Color) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            color,
        }
    }
}

/// The complete input to one render.
///
/// Built fresh for each frame and consumed once. Tiles and labels are drawn in
/// the order given, so later entries cover earlier ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub grid: GridSpec,
    /// Outer canvas fill, laid down before the arena. The arena currently
    /// spans the whole canvas, so this only shows if that ever changes.
    #[serde(default = "default_fill")]
    pub fill: Color,
    /// Arena background inside the grid.
    pub background: Color,
    #[serde(default = "default_grid_line")]
    pub grid_line: Color,
    #[serde(default)]
    pub tiles: Vec<Tile>,
    #[serde(default)]
    pub labels: Vec<Label>,
}

fn default_fill() -> Color {
    Color::WHITE
}

fn default_grid_line() -> Color {
    Color::MEDIUM_AQUAMARINE
}

impl Scene {
    /// An empty scene with the default fill and grid line colors.
    pub fn new(grid: GridSpec, background: Color) -> Self {
        Self {
            grid,
            fill: default_fill(),
            background,
            grid_line: default_grid_line(),
            tiles: Vec::new(),
            labels: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_grid_matches_layout_constants() {
        let grid = GridSpec::for_window(WINDOW_WIDTH, WINDOW_HEIGHT, CELL_SIZE).unwrap();
        assert_eq!(grid.rows(), 24);
        assert_eq!(grid.columns(), 32);
        assert_eq!(grid.pixel_width(), WINDOW_WIDTH);
        assert_eq!(grid.pixel_height(), WINDOW_HEIGHT);
    }

    #[test]
    fn grid_spec_rejects_zero_dimensions() {
        assert!(matches!(
            GridSpec::new(0, 4, 10),
            Err(RenderError::InvalidDimension { .. })
        ));
        assert!(matches!(
            GridSpec::new(3, 0, 10),
            Err(RenderError::InvalidDimension { .. })
        ));
        assert!(matches!(
            GridSpec::new(3, 4, 0),
            Err(RenderError::InvalidDimension { .. })
        ));
        assert!(GridSpec::for_window(10, 10, 25).is_err());
    }

    #[test]
    fn grid_spec_rejects_overflowing_pixel_size() {
        assert!(GridSpec::new(1, u32::MAX, 2).is_err());
    }

    #[test]
    fn pixel_rect_maps_row_and_column_to_pixels() {
        assert_eq!(
            Cell::new(2, 3).pixel_rect(10),
            Some(Rect::new(30, 20, 10, 10))
        );
        assert_eq!(Cell::new(0, 0).pixel_rect(7), Some(Rect::sized(7, 7)));
    }

    #[test]
    fn pixel_rect_reports_unaddressable_origins() {
        assert_eq!(Cell::new(0, u32::MAX).pixel_rect(2), None);
        assert_eq!(Cell::new(u32::MAX / 2 + 1, 0).pixel_rect(2), None);
        assert!(Cell::new(2, 1).pixel_rect(u32::MAX).is_none());
    }

    #[test]
    fn rect_fit_checks_do_not_wrap() {
        let r = Rect::new(u32::MAX, 0, 2, 1);
        assert!(!r.fits_within(u32::MAX, 1));
        assert!(Rect::sized(4, 3).fits_within(4, 3));
        assert!(!Rect::new(1, 0, 4, 3).fits_within(4, 3));
    }

    #[test]
    fn scene_json_fills_in_defaults() {
        let json = r#"{
            "grid": {"rows": 2, "columns": 3, "cell_size": 5},
            "background": {"r": 1, "g": 2, "b": 3}
        }"#;
        let scene: Scene = serde_json::from_str(json).unwrap();
        assert_eq!(scene.grid.pixel_width(), 15);
        assert_eq!(scene.background, Color::rgb(1, 2, 3));
        assert_eq!(scene.fill, Color::WHITE);
        assert_eq!(scene.grid_line, Color::MEDIUM_AQUAMARINE);
        assert!(scene.tiles.is_empty());
        assert!(scene.labels.is_empty());
    }

    #[test]
    fn scene_json_rejects_invalid_grid() {
        let json = r#"{
            "grid": {"rows": 0, "columns": 3, "cell_size": 5},
            "background": {"r": 1, "g": 2, "b": 3}
        }"#;
        assert!(serde_json::from_str::<Scene>(json).is_err());
    }
}
