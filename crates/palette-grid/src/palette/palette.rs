//! Ordered palette with precomputed perceptual coordinates.

use std::collections::HashMap;

use super::error::PaletteError;
use crate::color::{Lab, Rgba};

/// An ordered, non-empty set of unique colors.
///
/// Position defines identity: `palette.color(i)` is the color of index `i`
/// in every index grid and tabular export derived from this palette.
///
/// Uniqueness is checked on RGB only. Alpha is carried through to rendered
/// output but never participates in matching, so two entries differing only
/// in alpha could not be told apart by the classifier.
///
/// # Precomputation
///
/// Lab coordinates are computed once at construction; the palette never
/// changes afterwards.
///
/// # Example
///
/// ```
/// use palette_grid::{Palette, Rgba};
///
/// let palette = Palette::new(&[Rgba::opaque(0, 0, 0), Rgba::opaque(255, 255, 255)]).unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.color(1), Rgba::opaque(255, 255, 255));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Rgba>,
    lab: Vec<Lab>,
}

impl Palette {
    /// Create a palette from colors in index order.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `colors` is empty
    /// - [`PaletteError::DuplicateColor`] if two entries share an RGB value
    pub fn new(colors: &[Rgba]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let mut seen: HashMap<[u8; 3], usize> = HashMap::with_capacity(colors.len());
        for (index, color) in colors.iter().enumerate() {
            if let Some(&first) = seen.get(&color.rgb()) {
                return Err(PaletteError::DuplicateColor {
                    index,
                    first,
                    color: color.to_hex_rgb(),
                });
            }
            seen.insert(color.rgb(), index);
        }

        Ok(Self {
            colors: colors.to_vec(),
            lab: colors.iter().map(|&c| Lab::from(c)).collect(),
        })
    }

    /// Create a palette from hex strings (`RRGGBB` or `RRGGBBAA`, optional `#`).
    ///
    /// # Example
    ///
    /// ```
    /// use palette_grid::Palette;
    ///
    /// let palette = Palette::from_hex(&["#FF0000", "#00FF00FF", "0000ff"]).unwrap();
    /// assert_eq!(palette.len(), 3);
    /// ```
    pub fn from_hex<S: AsRef<str>>(hex: &[S]) -> Result<Self, PaletteError> {
        let colors = hex
            .iter()
            .enumerate()
            .map(|(index, s)| {
                s.as_ref()
                    .parse::<Rgba>()
                    .map_err(|source| PaletteError::ParseColor { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Palette::new(&colors)
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The color at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgba {
        self.colors[idx]
    }

    /// All colors in index order.
    #[inline]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Precomputed Lab coordinates of the color at `idx`.
    #[inline]
    pub fn lab(&self, idx: usize) -> Lab {
        self.lab[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ParseColorError;

    #[test]
    fn test_empty_palette_rejected() {
        assert_eq!(Palette::new(&[]), Err(PaletteError::EmptyPalette));
        let empty: [&str; 0] = [];
        assert_eq!(Palette::from_hex(&empty), Err(PaletteError::EmptyPalette));
    }

    #[test]
    fn test_duplicate_rgb_rejected_even_with_different_alpha() {
        let err = Palette::new(&[
            Rgba::new(10, 20, 30, 255),
            Rgba::opaque(0, 0, 0),
            Rgba::new(10, 20, 30, 0),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            PaletteError::DuplicateColor {
                index: 2,
                first: 0,
                color: "#0A141E".to_string(),
            }
        );
    }

    #[test]
    fn test_from_hex_reports_index_of_bad_entry() {
        let err = Palette::from_hex(&["#000000", "#12"]).unwrap_err();
        assert_eq!(
            err,
            PaletteError::ParseColor {
                index: 1,
                source: ParseColorError::InvalidLength(2),
            }
        );
    }

    #[test]
    fn test_order_is_preserved() {
        let palette = Palette::from_hex(&["#0000FF", "#FF0000", "#00FF00"]).unwrap();
        assert_eq!(palette.color(0), Rgba::opaque(0, 0, 255));
        assert_eq!(palette.color(1), Rgba::opaque(255, 0, 0));
        assert_eq!(palette.color(2), Rgba::opaque(0, 255, 0));
        assert_eq!(palette.len(), 3);
    }

    #[test]
    fn test_alpha_is_kept() {
        let palette = Palette::from_hex(&["#FF000080"]).unwrap();
        assert_eq!(palette.color(0), Rgba::new(255, 0, 0, 0x80));
    }

    #[test]
    fn test_lab_precomputed() {
        let palette = Palette::from_hex(&["#FFFFFF"]).unwrap();
        assert!((palette.lab(0).l - 100.0).abs() < 0.01);
    }
}
