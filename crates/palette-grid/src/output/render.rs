//! Reconstruction of a full-color raster from an index grid.

use crate::output::IndexGrid;
use crate::raster::RasterImage;

/// Expand `grid` into an RGBA image by substituting each index with its
/// palette color, alpha included.
///
/// The output has the grid's dimensions and every pixel is copied verbatim
/// from the palette, so it never holds more distinct colors than the
/// palette has entries.
///
/// # Example
///
/// ```
/// use palette_grid::{render, IndexGrid, Palette, Rgba};
///
/// let palette = Palette::from_hex(&["#00000000", "#FFFFFF"]).unwrap();
/// let grid = IndexGrid::new(vec![1, 0], 2, 1, palette).unwrap();
///
/// let image = render(&grid);
/// assert_eq!(image.pixels(), &[Rgba::opaque(255, 255, 255), Rgba::new(0, 0, 0, 0)]);
/// ```
pub fn render(grid: &IndexGrid) -> RasterImage {
    let palette = grid.palette();
    let pixels = grid.indices().iter().map(|&idx| palette.color(idx)).collect();
    RasterImage::from_parts(grid.width(), grid.height(), pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::palette::Palette;

    #[test]
    fn test_dimensions_match_grid() {
        let palette = Palette::from_hex(&["#000000", "#FFFFFF"]).unwrap();
        let grid = IndexGrid::new(vec![0; 12], 4, 3, palette).unwrap();
        let image = render(&grid);
        assert_eq!((image.width(), image.height()), (4, 3));
    }

    #[test]
    fn test_pixels_are_palette_colors_in_layout_order() {
        let palette = Palette::from_hex(&["#112233", "#445566AA", "#778899"]).unwrap();
        let grid = IndexGrid::new(vec![2, 0, 1, 1, 2, 0], 3, 2, palette.clone()).unwrap();
        let image = render(&grid);

        assert_eq!(image.pixel(0, 0), palette.color(2));
        assert_eq!(image.pixel(2, 0), Rgba::new(0x44, 0x55, 0x66, 0xAA));
        assert_eq!(image.pixel(1, 1), palette.color(2));
        assert!(image.distinct_colors() <= palette.len());
    }
}
