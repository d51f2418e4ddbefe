//! Frame sinks: where a finished canvas goes.
//!
//! [`TerminalExporter`] streams the frame as an inline image; terminals
//! without inline-image support can use [`PngFileExporter`] instead.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use log::{debug, info};

use crate::core::Canvas;
use crate::inline::{encode_inline_into, InlineImageFramer, Iterm2Framer};
use crate::png::encode_png;
use crate::types::RenderError;

/// Destination for finished frames.
pub trait FrameSink {
    fn emit(&mut self, canvas: &Canvas) -> Result<(), RenderError>;
}

/// Writes frames to a terminal as inline images.
pub struct TerminalExporter<W: Write> {
    out: W,
    framer: Box<dyn InlineImageFramer>,
    buf: Vec<u8>,
}

impl TerminalExporter<io::Stdout> {
    pub fn stdout(framer: impl InlineImageFramer + 'static) -> Self {
        Self::new(io::stdout(), framer)
    }
}

impl<W: Write> TerminalExporter<W> {
    pub fn new(out: W, framer: impl InlineImageFramer + 'static) -> Self {
        Self {
            out,
            framer: Box::new(framer),
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<(), RenderError> {
        self.out.write_all(&self.buf).map_err(RenderError::export)?;
        self.out.flush().map_err(RenderError::export)?;
        Ok(())
    }
}

impl<W: Write> FrameSink for TerminalExporter<W> {
    fn emit(&mut self, canvas: &Canvas) -> Result<(), RenderError> {
        self.buf.clear();
        encode_inline_into(canvas, self.framer.as_ref(), &mut self.buf)?;
        debug!(
            "emitting {}x{} frame as {} bytes",
            canvas.width(),
            canvas.height(),
            self.buf.len()
        );
        self.flush_buf()
    }
}

/// Writes each frame to a PNG file, replacing the previous one.
#[derive(Debug, Clone)]
pub struct PngFileExporter {
    path: PathBuf,
}

impl PngFileExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FrameSink for PngFileExporter {
    fn emit(&mut self, canvas: &Canvas) -> Result<(), RenderError> {
        let png = encode_png(canvas)?;
        fs::write(&self.path, &png)
            .map_err(|e| RenderError::export(format!("{}: {}", self.path.display(), e)))?;
        info!("wrote {} ({} bytes)", self.path.display(), png.len());
        Ok(())
    }
}

/// Encode `canvas` as an iTerm2 inline image and write it to `writer`.
pub fn encode_and_emit<W: Write>(canvas: &Canvas, writer: &mut W) -> Result<(), RenderError> {
    let mut buf = Vec::new();
    encode_inline_into(canvas, &Iterm2Framer::default(), &mut buf)?;
    writer.write_all(&buf).map_err(RenderError::export)?;
    writer.flush().map_err(RenderError::export)
}
