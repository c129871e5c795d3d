//! In-memory RGBA raster.

use std::collections::HashSet;

use crate::api::MapError;
use crate::color::Rgba;

/// A width × height grid of RGBA pixels in row-major order.
///
/// Created by decoding an input file, by downsampling, or by rendering an
/// index grid. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl RasterImage {
    /// Wrap a pixel buffer.
    ///
    /// # Errors
    ///
    /// [`MapError::GridShape`] if `pixels.len() != width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self, MapError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(MapError::GridShape {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build from interleaved `[R, G, B, A, ...]` bytes, the layout used by
    /// image decoders and encoders.
    ///
    /// # Errors
    ///
    /// [`MapError::GridShape`] if the buffer does not hold exactly
    /// `width * height` RGBA pixels.
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Result<Self, MapError> {
        if bytes.len() % 4 != 0 {
            return Err(MapError::GridShape {
                width,
                height,
                len: bytes.len() / 4,
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| Rgba::new(px[0], px[1], px[2], px[3]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// Assemble an image the caller already knows to be well-shaped.
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<Rgba>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// An image filled with one color.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// The pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the image.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Interleaved `[R, G, B, A, ...]` bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            bytes.extend_from_slice(&px.to_bytes());
        }
        bytes
    }

    /// Number of distinct RGBA values in the image.
    pub fn distinct_colors(&self) -> usize {
        self.pixels.iter().collect::<HashSet<_>>().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_length() {
        let err = RasterImage::new(2, 2, vec![Rgba::opaque(0, 0, 0); 3]).unwrap_err();
        assert!(matches!(
            err,
            MapError::GridShape {
                width: 2,
                height: 2,
                len: 3
            }
        ));
    }

    #[test]
    fn test_rgba8_round_trip_layout() {
        let bytes = [1, 2, 3, 4, 5, 6, 7, 8];
        let image = RasterImage::from_rgba8(2, 1, &bytes).unwrap();
        assert_eq!(image.pixel(1, 0), Rgba::new(5, 6, 7, 8));
        assert_eq!(image.to_rgba8(), bytes.to_vec());
    }

    #[test]
    fn test_from_rgba8_rejects_partial_pixels() {
        assert!(RasterImage::from_rgba8(1, 1, &[0, 0, 0]).is_err());
    }

    #[test]
    fn test_distinct_colors() {
        let black = Rgba::opaque(0, 0, 0);
        let white = Rgba::opaque(255, 255, 255);
        let image = RasterImage::new(3, 1, vec![black, white, black]).unwrap();
        assert_eq!(image.distinct_colors(), 2);
    }
}
