//! # Text Raster
//!
//! A byte grid that `embedded-graphics` text renders into, with integer
//! pixel magnification.
//!
//! The built-in monospace fonts top out at 10x20 pixels per glyph, far too
//! small to sample a dense point cloud from. The raster therefore presents
//! a shrunken drawable area to the text renderer and plots every font pixel
//! as a `pixel_scale`-sided block in the full-resolution grid. A 10x20 font
//! at scale 10 lands as 100x200-pixel glyphs.

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
    Pixel,
};

/// Value written for ink pixels.
const INK: u8 = 255;

/// A width x height byte grid with block-magnified text drawing.
///
/// Out-of-bounds pixels are dropped, so text wider than the drawable area
/// is clipped rather than wrapped or rejected.
pub struct TextRaster {
    /// Grid width in pixels.
    width: usize,
    /// Grid height in pixels.
    height: usize,
    /// Side length of the block each font pixel becomes.
    pixel_scale: usize,
    /// Row-major pixel values, 0 or `INK`.
    data: Box<[u8]>,
}

impl TextRaster {
    /// Creates a cleared raster.
    ///
    /// A `pixel_scale` of zero is treated as one.
    #[must_use]
    pub fn new(width: usize, height: usize, pixel_scale: usize) -> Self {
        Self {
            width,
            height,
            pixel_scale: pixel_scale.max(1),
            data: vec![0u8; width * height].into_boxed_slice(),
        }
    }

    /// Grid width in pixels.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in pixels.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// The magnification factor applied to drawn text.
    #[inline]
    #[must_use]
    pub const fn pixel_scale(&self) -> usize {
        self.pixel_scale
    }

    /// Resets every pixel to zero.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Pixel value at `(x, y)`; zero outside the grid.
    #[inline]
    #[must_use]
    pub fn value(&self, x: usize, y: usize) -> u8 {
        if x < self.width && y < self.height {
            self.data[y * self.width + x]
        } else {
            0
        }
    }

    /// Fills the `pixel_scale`-sided block for one font-space pixel.
    fn plot_block(&mut self, fx: i32, fy: i32, value: u8) {
        if fx < 0 || fy < 0 {
            return;
        }
        let base_x = fx as usize * self.pixel_scale;
        let base_y = fy as usize * self.pixel_scale;

        for dy in 0..self.pixel_scale {
            let y = base_y + dy;
            if y >= self.height {
                break;
            }
            let row = y * self.width;
            for dx in 0..self.pixel_scale {
                let x = base_x + dx;
                if x >= self.width {
                    break;
                }
                self.data[row + x] = value;
            }
        }
    }
}

impl OriginDimensions for TextRaster {
    fn size(&self) -> Size {
        // Text is laid out in font space; the block plot scales it back up.
        Size::new(
            (self.width / self.pixel_scale) as u32,
            (self.height / self.pixel_scale) as u32,
        )
    }
}

impl DrawTarget for TextRaster {
    type Color = BinaryColor;
    type Error = std::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let value = if color.is_on() { INK } else { 0 };
            self.plot_block(point.x, point.y, value);
        }
        Ok(())
    }
}
