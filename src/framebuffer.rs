//! Bit-packed monochrome frame buffer in SSD1306 page layout.
//!
//! Byte `page * width + x` holds 8 vertically stacked pixels of column `x`,
//! bit 0 being the top row of the page. This is the layout the controller
//! expects in horizontal addressing mode, so [`Framebuffer::as_bytes()`]
//! can be streamed to the device without conversion.
//!
//! The buffer also implements [`DrawTarget`], which is how lines, circles
//! and other primitives from `embedded-graphics` reach the panel.

use core::convert::Infallible;

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Pixel, Size},
};

use crate::config::MAX_BUFFER_LEN;

/// In-memory canvas owned by [`OledDriver`](crate::OledDriver).
///
/// Storage is a fixed array sized for the largest supported panel; only the
/// first `pages * width` bytes are in use.
pub struct Framebuffer {
    width: u32,
    height: u32,
    buffer: [u8; MAX_BUFFER_LEN],
}

impl Framebuffer {
    /// Create a cleared buffer for a `width`×`height` canvas.
    ///
    /// Callers are expected to pass a geometry accepted by
    /// [`DisplayConfig::validate()`](crate::DisplayConfig::validate). A height
    /// that is not a multiple of 8 is rounded down to whole pages, and a
    /// canvas larger than the storage is clamped to it.
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.min(128);
        let height = (height / 8 * 8).min((MAX_BUFFER_LEN as u32 / width.max(1)) * 8);
        Self {
            width,
            height,
            buffer: [0; MAX_BUFFER_LEN],
        }
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of 8-row pages.
    pub fn pages(&self) -> u32 {
        self.height / 8
    }

    /// The packed pixel data, exactly `pages * width` bytes long.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.len()]
    }

    fn len(&self) -> usize {
        (self.pages() * self.width) as usize
    }

    /// Byte index and bit mask of `(x, y)`, or `None` when off-canvas.
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y / 8 * self.width + x) as usize;
        Some((index, 1 << (y % 8)))
    }

    /// Set (`on = true`) or clear one pixel.
    ///
    /// Coordinates outside the canvas are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if let Some((index, mask)) = self.locate(x, y) {
            if on {
                self.buffer[index] |= mask;
            } else {
                self.buffer[index] &= !mask;
            }
        }
    }

    /// Read one pixel. Coordinates outside the canvas read as off.
    pub fn get_pixel(&self, x: i32, y: i32) -> bool {
        self.locate(x, y)
            .map(|(index, mask)| self.buffer[index] & mask != 0)
            .unwrap_or(false)
    }

    /// Set every pixel to `on`.
    pub fn clear(&mut self, on: bool) {
        let fill = if on { 0xFF } else { 0x00 };
        let len = self.len();
        self.buffer[..len].fill(fill);
    }

    /// Copy a monochrome bitmap onto the canvas with its top-left corner at
    /// `(x, y)`.
    ///
    /// `bitmap` is row-major with the most significant bit as the leftmost
    /// pixel; each row occupies `ceil(bitmap_width / 8)` bytes. Both set and
    /// cleared source pixels are copied. Parts falling outside the canvas, or
    /// beyond the end of a short `bitmap`, are skipped.
    pub fn blit(&mut self, bitmap: &[u8], x: i32, y: i32, bitmap_width: u32, bitmap_height: u32) {
        let stride = bitmap_width.div_ceil(8) as usize;
        for row in 0..bitmap_height {
            let row_start = row as usize * stride;
            let Some(row_bytes) = bitmap.get(row_start..row_start + stride) else {
                break;
            };
            for col in 0..bitmap_width {
                let byte = row_bytes[(col / 8) as usize];
                let on = byte & (0x80 >> (col % 8)) != 0;
                self.set_pixel(x.saturating_add(col as i32), y.saturating_add(row as i32), on);
            }
        }
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        Framebuffer::clear(self, color.is_on());
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
