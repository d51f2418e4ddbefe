//! Inline-image framing for terminals that display images in the text stream.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use crossterm::{cursor, QueueableCommand};

use crate::core::Canvas;
use crate::png::encode_png;
use crate::types::RenderError;

/// Wraps an encoded image payload in a terminal-specific escape sequence.
pub trait InlineImageFramer {
    /// Append the framed payload to `out`. `payload` is base64 of the whole
    /// image file; `width`/`height` are its pixel size.
    fn frame_into(
        &self,
        payload: &str,
        width: u32,
        height: u32,
        out: &mut Vec<u8>,
    ) -> Result<(), RenderError>;
}

/// iTerm2's `OSC 1337 ; File=inline=1 : <base64> BEL` sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Iterm2Framer {
    /// Move the cursor to the start of the second row before the image so
    /// each frame lands in the same place.
    pub position_cursor: bool,
}

impl Default for Iterm2Framer {
    fn default() -> Self {
        Self {
            position_cursor: true,
        }
    }
}

impl InlineImageFramer for Iterm2Framer {
    fn frame_into(
        &self,
        payload: &str,
        _width: u32,
        _height: u32,
        out: &mut Vec<u8>,
    ) -> Result<(), RenderError> {
        if self.position_cursor {
            out.queue(cursor::MoveTo(0, 1))
                .map_err(RenderError::export)?;
        }
        out.extend_from_slice(b"\x1b]1337;File=inline=1:");
        out.extend_from_slice(payload.as_bytes());
        out.push(0x07);
        Ok(())
    }
}

/// Encode `canvas` and frame it into `out`.
///
/// This builds the full byte stream without touching stdout.
pub fn encode_inline_into(
    canvas: &Canvas,
    framer: &dyn InlineImageFramer,
    out: &mut Vec<u8>,
) -> Result<(), RenderError> {
    let png = encode_png(canvas)?;
    let payload = STANDARD.encode(&png);
    framer.frame_into(&payload, canvas.width(), canvas.height(), out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::png::decode_png;
    use crate::types::Color;

    const PREFIX: &[u8] = b"\x1b]1337;File=inline=1:";

    fn payload_of(bytes: &[u8]) -> &[u8] {
        let start = bytes
            .windows(PREFIX.len())
            .position(|w| w == PREFIX)
            .expect("inline prefix")
            + PREFIX.len();
        assert_eq!(bytes.last(), Some(&0x07));
        &bytes[start..bytes.len() - 1]
    }

    #[test]
    fn iterm2_sequence_wraps_base64_png() {
        let mut canvas = Canvas::new(4, 3, Color::WHITE).unwrap();
        canvas.set_pixel(3, 2, Color::RED).unwrap();

        let mut out = Vec::new();
        encode_inline_into(&canvas, &Iterm2Framer::default(), &mut out).unwrap();

        let png = STANDARD.decode(payload_of(&out)).unwrap();
        assert_eq!(decode_png(&png).unwrap(), canvas);
    }

    #[test]
    fn cursor_prefix_is_optional() {
        let canvas = Canvas::new(1, 1, Color::BLACK).unwrap();

        let mut with_cursor = Vec::new();
        encode_inline_into(&canvas, &Iterm2Framer::default(), &mut with_cursor).unwrap();
        assert!(with_cursor.starts_with(b"\x1b["));
        assert!(!with_cursor.starts_with(PREFIX));

        let mut bare = Vec::new();
        let framer = Iterm2Framer {
            position_cursor: false,
        };
        encode_inline_into(&canvas, &framer, &mut bare).unwrap();
        assert!(bare.starts_with(PREFIX));
        assert!(with_cursor.ends_with(&bare));
    }

    #[test]
    fn custom_framers_receive_payload_and_size() {
        struct Tagged;
        impl InlineImageFramer for Tagged {
            fn frame_into(
                &self,
                payload: &str,
                width: u32,
                height: u32,
                out: &mut Vec<u8>,
            ) -> Result<(), RenderError> {
                out.extend_from_slice(format!("{}x{}:{}", width, height, payload.len()).as_bytes());
                Ok(())
            }
        }

        let canvas = Canvas::new(5, 2, Color::TEAL).unwrap();
        let mut out = Vec::new();
        encode_inline_into(&canvas, &Tagged, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("5x2:"));
    }
}
