//! Normalized sRGB color type
//!
//! sRGB is the encoding of image files and palette hex strings. [`Srgb`] is
//! the 0.0..=1.0 form of an [`Rgba`] with alpha dropped; it is the entry
//! point of the perceptual conversions.

use super::rgba::Rgba;

/// A color in sRGB color space, channels normalized to 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-encoded, 0.0..=1.0)
    pub r: f32,
    /// Green channel (gamma-encoded, 0.0..=1.0)
    pub g: f32,
    /// Blue channel (gamma-encoded, 0.0..=1.0)
    pub b: f32,
}

impl Srgb {
    /// Create a new Srgb color from float values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use palette_grid::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }
}

impl From<Rgba> for Srgb {
    /// Normalize the color channels, dropping alpha.
    #[inline]
    fn from(color: Rgba) -> Self {
        Self::from_u8(color.r, color.g, color.b)
    }
}
