//! PaletteMapper builder -- the primary entry point for the crate.
//!
//! [`PaletteMapper`] bundles a palette and a scale factor and runs the
//! downsample + classify steps in memory.

use crate::api::MapError;
use crate::classify::PixelClassifier;
use crate::output::IndexGrid;
use crate::palette::Palette;
use crate::preprocess::downsample;
use crate::raster::RasterImage;

/// Scale factor used until [`PaletteMapper::scale`] is called.
pub const DEFAULT_SCALE: u32 = 1;

/// Downsample-and-classify pipeline over a fixed palette.
///
/// # Design
///
/// - Constructor requires a [`Palette`]; the classifier's spatial index is
///   built once, here
/// - Configuration methods consume and return `self`
/// - [`quantize()`](Self::quantize) takes `&self`, so one mapper serves any
///   number of images
///
/// # Example
///
/// ```
/// use palette_grid::{Palette, PaletteMapper, RasterImage, Rgba};
///
/// let palette = Palette::from_hex(&["#000000", "#FFFFFF"]).unwrap();
/// let mapper = PaletteMapper::new(palette).unwrap().scale(2);
///
/// let image = RasterImage::filled(6, 4, Rgba::opaque(240, 240, 240));
/// let grid = mapper.quantize(&image).unwrap();
///
/// assert_eq!((grid.width(), grid.height()), (3, 2));
/// assert_eq!(grid.counts().as_slice(), &[0, 6]);
/// ```
#[derive(Debug, Clone)]
pub struct PaletteMapper {
    classifier: PixelClassifier,
    scale: u32,
}

impl PaletteMapper {
    /// Create a mapper for `palette` with a scale factor of 1.
    ///
    /// # Errors
    ///
    /// [`MapError::EmptyPalette`] if the palette has no entries.
    pub fn new(palette: Palette) -> Result<Self, MapError> {
        Ok(Self {
            classifier: PixelClassifier::new(&palette)?,
            scale: DEFAULT_SCALE,
        })
    }

    /// Set the integer downsampling factor. Validated when an image is
    /// quantized, since validity depends on the image size.
    #[inline]
    pub fn scale(mut self, factor: u32) -> Self {
        self.scale = factor;
        self
    }

    /// The configured scale factor.
    #[inline]
    pub fn scale_factor(&self) -> u32 {
        self.scale
    }

    /// The palette grids are indexed against.
    #[inline]
    pub fn palette(&self) -> &Palette {
        self.classifier.palette()
    }

    /// The classifier built over the palette.
    #[inline]
    pub fn classifier(&self) -> &PixelClassifier {
        &self.classifier
    }

    /// Downsample `image` without classifying it.
    pub fn downsample(&self, image: &RasterImage) -> Result<RasterImage, MapError> {
        downsample(image, self.scale)
    }

    /// Downsample `image` by the scale factor and classify the result.
    ///
    /// # Errors
    ///
    /// [`MapError::InvalidScale`] if the factor is 0 or larger than either
    /// image dimension.
    pub fn quantize(&self, image: &RasterImage) -> Result<IndexGrid, MapError> {
        let small = self.downsample(image)?;
        Ok(self.classifier.classify(&small))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    fn bw() -> Palette {
        Palette::from_hex(&["#000000", "#FFFFFF"]).unwrap()
    }

    #[test]
    fn test_defaults() {
        let mapper = PaletteMapper::new(bw()).unwrap();
        assert_eq!(mapper.scale_factor(), DEFAULT_SCALE);
        assert_eq!(mapper.palette().len(), 2);
    }

    #[test]
    fn test_reusable_across_images() {
        let mapper = PaletteMapper::new(bw()).unwrap().scale(3);
        let dark = mapper
            .quantize(&RasterImage::filled(9, 3, Rgba::opaque(10, 10, 10)))
            .unwrap();
        let light = mapper
            .quantize(&RasterImage::filled(3, 9, Rgba::opaque(250, 250, 250)))
            .unwrap();
        assert_eq!(dark.indices(), &[0, 0, 0]);
        assert_eq!(light.indices(), &[1, 1, 1]);
    }

    #[test]
    fn test_scale_too_large_is_rejected() {
        let mapper = PaletteMapper::new(bw()).unwrap().scale(5);
        let err = mapper
            .quantize(&RasterImage::filled(4, 10, Rgba::opaque(0, 0, 0)))
            .unwrap_err();
        assert_eq!(
            err,
            MapError::InvalidScale {
                factor: 5,
                width: 4,
                height: 10
            }
        );
    }
}
