//! CIE L\*a\*b\* color space (D65 white point)
//!
//! Lab is the space used for palette-to-palette matching: Euclidean distance
//! in Lab tracks perceived color difference to first order, where Euclidean
//! RGB distance does not.

use super::linear_rgb::LinearRgb;
use super::rgba::Rgba;
use super::srgb::Srgb;

/// D65 reference white in XYZ (2° observer).
const WHITE_X: f32 = 0.950_47;
const WHITE_Y: f32 = 1.0;
const WHITE_Z: f32 = 1.088_83;

/// (6/29)^3
const EPSILON: f32 = 216.0 / 24389.0;
/// (29/6)^2 / 3
const SLOPE: f32 = 841.0 / 108.0;
const OFFSET: f32 = 4.0 / 29.0;

/// A color in CIE L\*a\*b\* space.
///
/// - `l`: lightness, 0.0 (black) to 100.0 (white)
/// - `a`: green (negative) to red (positive)
/// - `b`: blue (negative) to yellow (positive)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness
    pub l: f32,
    /// Green-red axis
    pub a: f32,
    /// Blue-yellow axis
    pub b: f32,
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Squared Euclidean distance (CIE76 ΔE²).
    ///
    /// # Example
    /// ```
    /// use palette_grid::Lab;
    /// let a = Lab::new(50.0, 0.0, 0.0);
    /// let b = Lab::new(53.0, 4.0, 0.0);
    /// assert_eq!(a.distance_squared(b), 25.0);
    /// ```
    #[inline]
    pub fn distance_squared(self, other: Lab) -> f32 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl * dl + da * da + db * db
    }

    /// Coordinates as a point for spatial indexing.
    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.l, self.a, self.b]
    }
}

#[inline]
fn lab_f(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        SLOPE * t + OFFSET
    }
}

impl From<LinearRgb> for Lab {
    /// Linear sRGB → XYZ (D65) → Lab.
    fn from(rgb: LinearRgb) -> Self {
        let x = 0.412_456_4 * rgb.r + 0.357_576_1 * rgb.g + 0.180_437_5 * rgb.b;
        let y = 0.212_672_9 * rgb.r + 0.715_152_2 * rgb.g + 0.072_175_0 * rgb.b;
        let z = 0.019_333_9 * rgb.r + 0.119_192_0 * rgb.g + 0.950_304_1 * rgb.b;

        let fx = lab_f(x / WHITE_X);
        let fy = lab_f(y / WHITE_Y);
        let fz = lab_f(z / WHITE_Z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Srgb> for Lab {
    #[inline]
    fn from(srgb: Srgb) -> Self {
        Lab::from(LinearRgb::from(srgb))
    }
}

impl From<Rgba> for Lab {
    #[inline]
    fn from(color: Rgba) -> Self {
        Lab::from(LinearRgb::from(color))
    }
}
