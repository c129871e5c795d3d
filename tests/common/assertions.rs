//! Assertion helpers for tests.

use std::path::Path;

use palette_grid::{Palette, RasterImage};
use pretty_assertions::assert_eq;

/// Assert a file exists and starts with the PNG signature
pub fn assert_png_file(path: &Path) {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected PNG at {}: {e}", path.display()));
    assert_eq!(
        &bytes[..8.min(bytes.len())],
        &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A][..],
        "Expected PNG signature in {}",
        path.display()
    );
}

/// Assert a file exists and is a zip container, as every xlsx is
pub fn assert_xlsx_file(path: &Path) {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected xlsx at {}: {e}", path.display()));
    assert!(
        bytes.starts_with(b"PK\x03\x04"),
        "Expected zip header in {}, got {:?}",
        path.display(),
        &bytes[..4.min(bytes.len())]
    );
}

/// Assert every pixel of `image` is a palette color
pub fn assert_only_palette_colors(image: &RasterImage, palette: &Palette) {
    for (i, px) in image.pixels().iter().enumerate() {
        assert!(
            palette.colors().contains(px),
            "Pixel {i} ({px}) is not a palette color"
        );
    }
}

/// Read one member of the zip container at `path` as text
pub fn read_xlsx_part(path: &Path, part: &str) -> String {
    use std::io::Read;

    let file = std::fs::File::open(path)
        .unwrap_or_else(|e| panic!("Expected xlsx at {}: {e}", path.display()));
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut entry = archive
        .by_name(part)
        .unwrap_or_else(|e| panic!("Expected {part} in {}: {e}", path.display()));
    let mut text = String::new();
    entry.read_to_string(&mut text).unwrap();
    text
}
