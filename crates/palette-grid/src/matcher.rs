//! Perceptual palette-to-palette matching.
//!
//! Maps an arbitrary list of colors onto their perceptually nearest
//! equivalents in a reference palette, e.g. to normalize an ad-hoc color
//! list onto an official paper palette before using it for classification.
//!
//! Candidates and references are compared in a perceptual space (CIE Lab by
//! default) where Euclidean distance tracks perceived difference. This is a
//! different metric from [`crate::classify`], which uses plain RGB for
//! throughput; the two paths are kept separate on purpose.

use crate::api::MapError;
use crate::color::{Lab, Oklab, Rgba};
use crate::nearest::KdTree;
use crate::palette::Palette;

/// Perceptual space used for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PerceptualSpace {
    /// CIE L\*a\*b\* with a D65 white point.
    #[default]
    CieLab,
    /// Björn Ottosson's Oklab.
    Oklab,
}

impl PerceptualSpace {
    /// Coordinates of `color` in this space.
    #[inline]
    pub fn coordinates(self, color: Rgba) -> [f32; 3] {
        match self {
            PerceptualSpace::CieLab => Lab::from(color).to_array(),
            PerceptualSpace::Oklab => Oklab::from(color).to_array(),
        }
    }
}

/// Nearest-neighbor index over a reference palette in perceptual space.
///
/// # Example
///
/// ```
/// use palette_grid::{Palette, PaletteMatcher, Rgba};
///
/// let reference = Palette::from_hex(&["#FF0000", "#00FF00"]).unwrap();
/// let matcher = PaletteMatcher::new(&reference).unwrap();
///
/// let candidate: Rgba = "#FE0001".parse().unwrap();
/// assert_eq!(matcher.nearest(candidate), Rgba::opaque(255, 0, 0));
/// ```
#[derive(Debug, Clone)]
pub struct PaletteMatcher {
    reference: Palette,
    space: PerceptualSpace,
    tree: KdTree,
}

impl PaletteMatcher {
    /// Build a CIE Lab matcher over `reference`.
    ///
    /// # Errors
    ///
    /// [`MapError::EmptyPalette`] if the reference has no entries.
    pub fn new(reference: &Palette) -> Result<Self, MapError> {
        Self::with_space(reference, PerceptualSpace::CieLab)
    }

    /// Build a matcher over `reference` in the given space.
    ///
    /// # Errors
    ///
    /// [`MapError::EmptyPalette`] if the reference has no entries.
    pub fn with_space(reference: &Palette, space: PerceptualSpace) -> Result<Self, MapError> {
        let points: Vec<[f32; 3]> = match space {
            PerceptualSpace::CieLab => (0..reference.len())
                .map(|i| reference.lab(i).to_array())
                .collect(),
            PerceptualSpace::Oklab => reference
                .colors()
                .iter()
                .map(|&c| space.coordinates(c))
                .collect(),
        };
        let tree = KdTree::build(&points).ok_or(MapError::EmptyPalette)?;
        Ok(Self {
            reference: reference.clone(),
            space,
            tree,
        })
    }

    /// The reference palette.
    #[inline]
    pub fn reference(&self) -> &Palette {
        &self.reference
    }

    /// The space distances are measured in.
    #[inline]
    pub fn space(&self) -> PerceptualSpace {
        self.space
    }

    /// Reference index perceptually nearest to `candidate` (alpha ignored).
    ///
    /// Among equidistant references the tree's first hit wins; callers must
    /// not rely on which.
    #[inline]
    pub fn nearest_index(&self, candidate: Rgba) -> usize {
        self.tree.nearest(self.space.coordinates(candidate)).index
    }

    /// Reference color perceptually nearest to `candidate`.
    #[inline]
    pub fn nearest(&self, candidate: Rgba) -> Rgba {
        self.reference.color(self.nearest_index(candidate))
    }

    /// Map every candidate to its nearest reference color, in candidate order.
    pub fn match_all(&self, candidates: &[Rgba]) -> Vec<Rgba> {
        candidates.iter().map(|&c| self.nearest(c)).collect()
    }
}

/// Map `candidates` onto their nearest colors in `reference` (CIE Lab).
///
/// Returns reference colors, not Lab coordinates, one per candidate, in
/// candidate order. Candidates need not be unique.
///
/// # Errors
///
/// [`MapError::EmptyPalette`] if the reference has no entries.
pub fn match_palette(candidates: &[Rgba], reference: &Palette) -> Result<Vec<Rgba>, MapError> {
    Ok(PaletteMatcher::new(reference)?.match_all(candidates))
}
