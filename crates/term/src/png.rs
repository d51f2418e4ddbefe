//! Lossless PNG encoding of a canvas.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat};

use crate::core::Canvas;
use crate::types::RenderError;

/// Encode `canvas` as an RGBA8 PNG.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>, RenderError> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(
            &canvas.to_rgba_bytes(),
            canvas.width(),
            canvas.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(RenderError::export)?;
    Ok(out)
}

/// Decode PNG bytes back into a canvas. Non-RGBA images are converted.
pub fn decode_png(bytes: &[u8]) -> Result<Canvas, RenderError> {
    let img = image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .map_err(RenderError::export)?
        .to_rgba8();
    Canvas::from_rgba_bytes(img.width(), img.height(), img.as_raw())
}
