//! Domain-critical regression tests for palette-grid.
//!
//! Each test guards a property the fabrication workflow depends on: the
//! grid has the expected size, every cell names a real palette color, and
//! the preview, the counts and the grid agree with each other.

#[cfg(test)]
mod domain_tests {
    use crate::api::{MapError, PaletteMapper};
    use crate::classify::{classify, PixelClassifier};
    use crate::color::Rgba;
    use crate::matcher::match_palette;
    use crate::output::{export, render};
    use crate::palette::Palette;
    use crate::preprocess::downsample;
    use crate::raster::RasterImage;

    /// Deterministic noise image; every pixel differs from its neighbors.
    fn noise_image(width: u32, height: u32) -> RasterImage {
        let mut state = 0x2545_F491_u32;
        let pixels = (0..width * height)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                let [r, g, b, a] = state.to_le_bytes();
                Rgba::new(r, g, b, a)
            })
            .collect();
        RasterImage::new(width, height, pixels).unwrap()
    }

    fn paper_palette() -> Palette {
        Palette::from_hex(&[
            "#FFFFFF", "#000000", "#E53935", "#FDD835", "#43A047", "#1E88E5", "#8E24AA", "#FB8C00",
        ])
        .unwrap()
    }

    // ========================================================================
    // Downsampling
    // ========================================================================

    /// If this breaks, it means: the grid no longer has the size the
    /// downstream cutting plan assumes.
    #[test]
    fn test_downsampled_size_is_floor_division() {
        let image = noise_image(101, 59);
        for factor in [1, 2, 3, 7, 30, 59] {
            let small = downsample(&image, factor).unwrap();
            assert_eq!(
                (small.width(), small.height()),
                (101 / factor, 59 / factor),
                "factor {factor}"
            );
        }
    }

    /// If this breaks, it means: downsampling started blending pixels and
    /// introduced colors the source never had.
    #[test]
    fn test_downsampling_introduces_no_new_colors() {
        let image = noise_image(40, 30);
        let small = downsample(&image, 4).unwrap();
        for px in small.pixels() {
            assert!(image.pixels().contains(px), "{px} not in source");
        }
    }

    #[test]
    fn test_scale_larger_than_image_is_error() {
        let image = noise_image(10, 40);
        assert!(matches!(
            downsample(&image, 11),
            Err(MapError::InvalidScale { factor: 11, .. })
        ));
        assert!(matches!(
            downsample(&image, 0),
            Err(MapError::InvalidScale { factor: 0, .. })
        ));
    }

    // ========================================================================
    // Classification
    // ========================================================================

    /// If this breaks, it means: a cell refers to a color that does not
    /// exist, and the render or the export would panic or misreport.
    #[test]
    fn test_indices_within_palette() {
        let palette = paper_palette();
        let grid = classify(&noise_image(64, 48), &palette).unwrap();
        assert!(grid.indices().iter().all(|&i| i < palette.len()));
    }

    /// If this breaks, it means: a pixel that already is a palette color can
    /// be reassigned, so quantizing twice changes the result.
    #[test]
    fn test_classify_is_idempotent_on_palette_colors() {
        let palette = paper_palette();
        let pixels = (0..48)
            .map(|i| palette.color((i * 5) % palette.len()))
            .collect();
        let image = RasterImage::new(8, 6, pixels).unwrap();

        let grid = classify(&image, &palette).unwrap();
        for (idx, px) in grid.indices().iter().zip(image.pixels()) {
            assert_eq!(palette.color(*idx), *px);
        }
    }

    /// If this breaks, it means: the preview image and the index grid have
    /// drifted apart.
    #[test]
    fn test_render_then_reclassify_round_trips() {
        let palette = paper_palette();
        let classifier = PixelClassifier::new(&palette).unwrap();
        let grid = classifier.classify(&noise_image(33, 21));

        let preview = render(&grid);
        assert!(preview.distinct_colors() <= palette.len());
        assert_eq!(classifier.classify(&preview), grid);
    }

    #[test]
    fn test_single_color_palette_yields_all_zeros() {
        let palette = Palette::from_hex(&["#808080"]).unwrap();
        let grid = classify(&noise_image(12, 9), &palette).unwrap();
        assert!(grid.indices().iter().all(|&i| i == 0));
        assert_eq!(grid.counts().as_slice(), &[108]);
    }

    // ========================================================================
    // Counts and export
    // ========================================================================

    /// If this breaks, it means: the shopping list of paper squares no
    /// longer adds up to the number of cells.
    #[test]
    fn test_histogram_sums_to_cell_count() {
        let palette = paper_palette();
        let grid = classify(&noise_image(50, 20), &palette).unwrap();
        let counts = grid.counts();
        assert_eq!(counts.len(), palette.len());
        assert_eq!(counts.total(), 50 * 20);
        assert_eq!(export(&grid).counts().total(), 50 * 20);
    }

    // ========================================================================
    // End-to-end scenarios
    // ========================================================================

    #[test]
    fn test_four_quadrants_scale_two() {
        let red = Rgba::opaque(255, 0, 0);
        let green = Rgba::opaque(0, 255, 0);
        let blue = Rgba::opaque(0, 0, 255);
        let white = Rgba::opaque(255, 255, 255);

        let mut pixels = Vec::new();
        for y in 0..4 {
            for x in 0..4 {
                pixels.push(match (x < 2, y < 2) {
                    (true, true) => red,
                    (false, true) => green,
                    (true, false) => blue,
                    (false, false) => white,
                });
            }
        }
        let image = RasterImage::new(4, 4, pixels).unwrap();
        let palette = Palette::new(&[red, green, blue, white]).unwrap();

        let grid = PaletteMapper::new(palette).unwrap().scale(2).quantize(&image).unwrap();
        let rows: Vec<&[usize]> = grid.rows().collect();
        assert_eq!(rows, vec![&[0, 1][..], &[2, 3][..]]);
        assert_eq!(grid.counts().as_slice(), &[1, 1, 1, 1]);

        let table = export(&grid);
        assert_eq!(table.data_rows(), &[vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn test_near_red_matches_red() {
        let reference = Palette::from_hex(&["#FF0000", "#00FF00"]).unwrap();
        let candidate: Rgba = "#FE0001".parse().unwrap();
        let matched = match_palette(&[candidate], &reference).unwrap();
        assert_eq!(matched[0].to_hex_rgb(), "#FF0000");
    }
}
