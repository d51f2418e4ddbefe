//! Frame rendering core - pure rasterization with no I/O
//!
//! This crate turns a [`Scene`](types::Scene) into an RGBA [`Canvas`]. It has
//! no terminal, file or encoder dependencies, which keeps it:
//!
//! - **Deterministic**: the same scene always produces the same pixels
//! - **Testable**: every stage can be checked pixel by pixel
//! - **Stateless**: nothing survives between renders
//!
//! # Module Structure
//!
//! - [`canvas`]: bounds-checked RGBA pixel buffer with fill and blit
//! - [`grid`]: arena background and one-pixel grid lines
//! - [`sprite`]: solid one-cell tiles composited by straight overwrite
//! - [`font`]: fixed-width bitmap fonts behind the [`GlyphFont`] trait
//! - [`text`]: HUD labels with transparent glyph backgrounds
//! - [`frame`]: the assembler that runs the stages in order
//! - [`arena`]: snake arena palette, HUD layout and scene builder
//!
//! # Draw Order
//!
//! 1. Outer fill
//! 2. Arena background and grid lines
//! 3. Tiles, in scene order (last write wins)
//! 4. Labels, in scene order
//!
//! # Example
//!
//! ```
//! use snake_frame_core::types::{Cell, Color, GridSpec};
//! use snake_frame_core::{render, HudStats, SnakeArena};
//!
//! let grid = GridSpec::new(4, 6, 8).unwrap();
//! let scene = SnakeArena::new(grid)
//!     .with_food(Cell::new(1, 1))
//!     .with_snake([Cell::new(2, 3), Cell::new(2, 2)])
//!     .with_stats(HudStats { score: 3, best_score: 9 })
//!     .into_scene();
//!
//! let canvas = render(&scene).unwrap();
//! assert_eq!((canvas.width(), canvas.height()), (48, 32));
//! assert_eq!(canvas.get_pixel(8, 8).unwrap(), Color::RED);
//! ```

pub mod arena;
pub mod canvas;
pub mod font;
pub mod frame;
pub mod grid;
pub mod sprite;
pub mod text;

pub use snake_frame_types as types;

// Re-export commonly used types for convenience
pub use arena::{hud_labels, HudStats, Palette, SnakeArena};
pub use canvas::Canvas;
pub use font::{Font5x7, Glyph, GlyphFont};
pub use frame::{render, FrameAssembler};
pub use grid::{draw_arena, draw_grid};
pub use sprite::{draw_tile, SpriteCompositor};
pub use text::{draw_label, draw_label_with};
