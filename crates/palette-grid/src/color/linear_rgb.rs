//! Linear RGB color type
//!
//! Linear RGB is proportional to light intensity. It is the intermediate
//! step between gamma-encoded sRGB and the perceptual spaces.

use super::lut::{srgb8_to_linear, srgb_to_linear};
use super::rgba::Rgba;
use super::srgb::Srgb;

/// A color in linear RGB color space.
///
/// Values are typically in the range 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f32,
    /// Green channel (linear light intensity)
    pub g: f32,
    /// Blue channel (linear light intensity)
    pub b: f32,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl From<Srgb> for LinearRgb {
    /// Decode the sRGB transfer curve (IEC 61966-2-1).
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}

impl From<Rgba> for LinearRgb {
    /// Decode 8-bit channels through the lookup table, dropping alpha.
    fn from(color: Rgba) -> Self {
        Self {
            r: srgb8_to_linear(color.r),
            g: srgb8_to_linear(color.g),
            b: srgb8_to_linear(color.b),
        }
    }
}
