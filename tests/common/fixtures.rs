//! Test fixtures and constants.

use std::path::{Path, PathBuf};

use palette_grid::{Palette, RasterImage, Rgba};
use pixelcut::services::image_sink::encode_png;

/// Colors of the four-quadrant fixture, in palette order
pub mod colors {
    use palette_grid::Rgba;

    pub const RED: Rgba = Rgba::opaque(255, 0, 0);
    pub const GREEN: Rgba = Rgba::opaque(0, 255, 0);
    pub const BLUE: Rgba = Rgba::opaque(0, 0, 255);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
}

/// The four quadrant colors as a palette
pub fn quadrant_palette() -> Palette {
    Palette::new(&[colors::RED, colors::GREEN, colors::BLUE, colors::WHITE]).unwrap()
}

/// `size × size` image split into red, green (top) and blue, white (bottom) quadrants
pub fn quadrant_image(size: u32) -> RasterImage {
    let half = size / 2;
    let pixels = (0..size)
        .flat_map(|y| {
            (0..size).map(move |x| match (x < half, y < half) {
                (true, true) => colors::RED,
                (false, true) => colors::GREEN,
                (true, false) => colors::BLUE,
                (false, false) => colors::WHITE,
            })
        })
        .collect();
    RasterImage::new(size, size, pixels).unwrap()
}

/// Write `image` as PNG into `dir` and return the path
pub fn write_png_fixture(dir: &Path, name: &str, image: &RasterImage) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, encode_png(image).unwrap()).unwrap();
    path
}

/// Minimal configuration with a single preset
pub const QUADRANT_CONFIG: &str = r##"
default_preset: quadrants
scale: 2
presets:
  quadrants: ["#FF0000", "#00FF00", "#0000FF", "#FFFFFF"]
  mono: ["#000000"]
"##;
