//! Canvas: an owned RGBA pixel buffer.

use crate::types::{Color, Rect, RenderError};

/// 2D buffer of RGBA pixels, row-major.
///
/// Every accessor is bounds-checked and reports [`RenderError::OutOfBounds`]
/// instead of clamping; [`Canvas::put_clipped`] is the one exception, for
/// callers that want silent clipping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Allocate a `width x height` canvas with every pixel set to `fill`.
    pub fn new(width: u32, height: u32, fill: Color) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimension { width, height });
        }
        let len = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            pixels: vec![fill; len],
        })
    }

    /// Rebuild a canvas from row-major RGBA8 bytes.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self, RenderError> {
        let len = (width as usize) * (height as usize);
        if width == 0 || height == 0 || bytes.len() != len * 4 {
            return Err(RenderError::InvalidDimension { width, height });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| Color::rgba(px[0], px[1], px[2], px[3]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    #[inline(always)]
    fn idx(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    fn out_of_bounds(&self, x: u64, y: u64) -> RenderError {
        RenderError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Color, RenderError> {
        self.idx(x, y)
            .map(|i| self.pixels[i])
            .ok_or_else(|| self.out_of_bounds(x as u64, y as u64))
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<(), RenderError> {
        let i = self
            .idx(x, y)
            .ok_or_else(|| self.out_of_bounds(x as u64, y as u64))?;
        self.pixels[i] = color;
        Ok(())
    }

    /// Write a pixel at signed coordinates, skipping it if off-canvas.
    ///
    /// Returns whether the pixel landed.
    pub fn put_clipped(&mut self, x: i64, y: i64, color: Color) -> bool {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return false;
        };
        match self.idx(x, y) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Overwrite every pixel of `rect` with `color`.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        self.check_fits(rect)?;
        let w = self.width as usize;
        for y in rect.y..rect.y + rect.height {
            let start = (y as usize) * w + rect.x as usize;
            self.pixels[start..start + rect.width as usize].fill(color);
        }
        Ok(())
    }

    /// Copy `src_rect` of `src` into this canvas with its top-left at
    /// `(dest_x, dest_y)`.
    ///
    /// Straight overwrite: source alpha is copied, not blended. The region
    /// must lie inside both canvases or nothing is written.
    pub fn blit_rect(
        &mut self,
        dest_x: u32,
        dest_y: u32,
        src: &Canvas,
        src_rect: Rect,
    ) -> Result<(), RenderError> {
        src.check_fits(src_rect)?;
        let dest = Rect::new(dest_x, dest_y, src_rect.width, src_rect.height);
        self.check_fits(dest)?;

        let (dw, sw) = (self.width as usize, src.width as usize);
        let len = src_rect.width as usize;
        for row in 0..src_rect.height as usize {
            let s = (src_rect.y as usize + row) * sw + src_rect.x as usize;
            let d = (dest_y as usize + row) * dw + dest_x as usize;
            self.pixels[d..d + len].copy_from_slice(&src.pixels[s..s + len]);
        }
        Ok(())
    }

    fn check_fits(&self, rect: Rect) -> Result<(), RenderError> {
        if rect.fits_within(self.width, self.height) {
            Ok(())
        } else {
            Err(self.out_of_bounds(rect.right(), rect.bottom()))
        }
    }

    /// Flatten into RGBA8 bytes, row-major.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            out.extend_from_slice(&px.to_array());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_zero_sizes() {
        assert_eq!(
            Canvas::new(0, 3, Color::WHITE),
            Err(RenderError::InvalidDimension {
                width: 0,
                height: 3
            })
        );
        assert!(Canvas::new(3, 0, Color::WHITE).is_err());
    }

    #[test]
    fn new_fills_every_pixel() {
        let canvas = Canvas::new(4, 3, Color::TEAL).unwrap();
        assert_eq!(canvas.pixels().len(), 12);
        assert!(canvas.pixels().iter().all(|&p| p == Color::TEAL));
    }

    #[test]
    fn last_pixel_is_addressable_and_one_past_is_not() {
        let mut canvas = Canvas::new(5, 4, Color::WHITE).unwrap();
        canvas.set_pixel(4, 3, Color::RED).unwrap();
        assert_eq!(canvas.get_pixel(4, 3).unwrap(), Color::RED);

        assert!(matches!(
            canvas.set_pixel(5, 4, Color::RED),
            Err(RenderError::OutOfBounds { x: 5, y: 4, .. })
        ));
        assert!(canvas.get_pixel(5, 4).is_err());
        assert!(canvas.get_pixel(5, 0).is_err());
        assert!(canvas.get_pixel(0, 4).is_err());
    }

    #[test]
    fn put_clipped_skips_off_canvas_pixels() {
        let mut canvas = Canvas::new(2, 2, Color::WHITE).unwrap();
        assert!(!canvas.put_clipped(-1, 0, Color::RED));
        assert!(!canvas.put_clipped(0, 2, Color::RED));
        assert!(canvas.put_clipped(1, 1, Color::RED));
        assert_eq!(canvas.get_pixel(1, 1).unwrap(), Color::RED);
        assert_eq!(
            canvas.pixels().iter().filter(|&&p| p == Color::RED).count(),
            1
        );
    }

    #[test]
    fn blit_copies_region_without_blending() {
        let mut dst = Canvas::new(6, 6, Color::WHITE).unwrap();
        let mut src = Canvas::new(4, 4, Color::TRANSPARENT).unwrap();
        src.fill_rect(Rect::new(1, 1, 2, 2), Color::RED).unwrap();

        dst.blit_rect(3, 2, &src, Rect::new(1, 1, 3, 2)).unwrap();

        // Copied red from src (1..3, 1..3) and transparent from column 3.
        assert_eq!(dst.get_pixel(3, 2).unwrap(), Color::RED);
        assert_eq!(dst.get_pixel(4, 3).unwrap(), Color::RED);
        assert_eq!(dst.get_pixel(5, 2).unwrap(), Color::TRANSPARENT);
        assert_eq!(dst.get_pixel(2, 2).unwrap(), Color::WHITE);
        assert_eq!(dst.get_pixel(3, 4).unwrap(), Color::WHITE);
    }

    #[test]
    fn blit_rejects_regions_outside_either_canvas() {
        let mut dst = Canvas::new(4, 4, Color::WHITE).unwrap();
        let src = Canvas::new(3, 3, Color::RED).unwrap();

        assert!(matches!(
            dst.blit_rect(2, 2, &src, Rect::sized(3, 3)),
            Err(RenderError::OutOfBounds { .. })
        ));
        assert!(matches!(
            dst.blit_rect(0, 0, &src, Rect::new(1, 1, 3, 3)),
            Err(RenderError::OutOfBounds { .. })
        ));
        // Failed blits leave the destination untouched.
        assert!(dst.pixels().iter().all(|&p| p == Color::WHITE));
    }

    #[test]
    fn rgba_bytes_are_row_major() {
        let mut canvas = Canvas::new(2, 1, Color::WHITE).unwrap();
        canvas.set_pixel(1, 0, Color::rgba(1, 2, 3, 4)).unwrap();
        assert_eq!(canvas.to_rgba_bytes(), vec![255, 255, 255, 255, 1, 2, 3, 4]);

        let back = Canvas::from_rgba_bytes(2, 1, &canvas.to_rgba_bytes()).unwrap();
        assert_eq!(back, canvas);
        assert!(Canvas::from_rgba_bytes(2, 2, &canvas.to_rgba_bytes()).is_err());
    }
}
