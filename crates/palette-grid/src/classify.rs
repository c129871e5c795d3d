//! Bulk pixel classification.
//!
//! Every pixel is assigned the index of its nearest palette entry by plain
//! Euclidean distance over 8-bit RGB. This is intentionally not the
//! perceptual metric of [`crate::matcher`]: classification runs once per
//! pixel, matching runs once per palette entry. Callers wanting perceptual
//! accuracy at pixel scale should normalize their palette with the matcher
//! first rather than expect it here.

use crate::api::MapError;
use crate::nearest::KdTree;
use crate::output::IndexGrid;
use crate::palette::Palette;
use crate::raster::RasterImage;

/// Nearest-palette-entry classifier over RGB space.
///
/// Builds the spatial index once; [`classify()`](Self::classify) can then be
/// called for any number of images.
///
/// # Example
///
/// ```
/// use palette_grid::{PixelClassifier, Palette, RasterImage, Rgba};
///
/// let palette = Palette::from_hex(&["#000000", "#FFFFFF"]).unwrap();
/// let classifier = PixelClassifier::new(&palette).unwrap();
///
/// let image = RasterImage::filled(3, 2, Rgba::opaque(200, 210, 190));
/// let grid = classifier.classify(&image);
/// assert!(grid.indices().iter().all(|&i| i == 1));
/// ```
#[derive(Debug, Clone)]
pub struct PixelClassifier {
    palette: Palette,
    tree: KdTree,
}

impl PixelClassifier {
    /// Index the palette's RGB components (alpha excluded).
    ///
    /// # Errors
    ///
    /// [`MapError::EmptyPalette`] if the palette has no entries.
    pub fn new(palette: &Palette) -> Result<Self, MapError> {
        let points: Vec<[f32; 3]> = palette.colors().iter().map(|c| c.rgb_f32()).collect();
        let tree = KdTree::build(&points).ok_or(MapError::EmptyPalette)?;
        Ok(Self {
            palette: palette.clone(),
            tree,
        })
    }

    /// The palette indices refer to.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Index of the palette entry nearest to one pixel's RGB.
    #[inline]
    pub fn nearest_index(&self, rgb: [u8; 3]) -> usize {
        self.tree
            .nearest([rgb[0] as f32, rgb[1] as f32, rgb[2] as f32])
            .index
    }

    /// Classify every pixel of `image`.
    ///
    /// The result has the same width and height as `image` and every cell
    /// holds a valid index into [`palette()`](Self::palette).
    pub fn classify(&self, image: &RasterImage) -> IndexGrid {
        let indices = image
            .pixels()
            .iter()
            .map(|px| self.tree.nearest(px.rgb_f32()).index)
            .collect();
        IndexGrid::from_parts(indices, image.width(), image.height(), self.palette.clone())
    }
}

/// Classify `image` against `palette` in one call.
///
/// Equivalent to `PixelClassifier::new(palette)?.classify(image)`.
pub fn classify(image: &RasterImage, palette: &Palette) -> Result<IndexGrid, MapError> {
    Ok(PixelClassifier::new(palette)?.classify(image))
}
