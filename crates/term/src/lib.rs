//! Frame export for terminals.
//!
//! Takes a finished [`Canvas`](core::Canvas), encodes it as PNG and either
//! streams it through an inline-image escape sequence or writes it to disk.
//!
//! Goals:
//! - Keep encoding separate from I/O (`encode_inline_into` builds bytes only)
//! - Treat the terminal protocol as a pluggable framer
//! - Surface every encode or write problem as `RenderError::ExportFailure`
//!
//! # Environment Variables
//!
//! - `SNAKE_FRAME_OUTPUT`: write PNG files to this path instead of the terminal
//! - `SNAKE_FRAME_NO_CURSOR`: set to "1" or "true" to skip the cursor move
//!   before each inline image

pub mod config;
pub mod export;
pub mod inline;
pub mod png;

pub use snake_frame_core as core;
pub use snake_frame_types as types;

pub use config::ExportConfig;
pub use export::{encode_and_emit, FrameSink, PngFileExporter, TerminalExporter};
pub use inline::{encode_inline_into, InlineImageFramer, Iterm2Framer};
pub use png::{decode_png, encode_png};
