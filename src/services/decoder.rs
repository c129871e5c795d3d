//! Image decoding via the `image` crate.

use std::path::Path;

use image::DynamicImage;
use palette_grid::RasterImage;

use crate::error::PipelineError;

/// Decode an image file into an RGBA raster; the format follows the
/// file extension.
pub fn decode_path(path: &Path) -> Result<RasterImage, PipelineError> {
    let image = image::open(path).map_err(|source| PipelineError::Decode {
        source_name: path.display().to_string(),
        source,
    })?;
    into_raster(image)
}

/// Decode an in-memory encoded image. `source_name` only labels errors.
pub fn decode_bytes(bytes: &[u8], source_name: &str) -> Result<RasterImage, PipelineError> {
    let image = image::load_from_memory(bytes).map_err(|source| PipelineError::Decode {
        source_name: source_name.to_string(),
        source,
    })?;
    into_raster(image)
}

fn into_raster(image: DynamicImage) -> Result<RasterImage, PipelineError> {
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(RasterImage::from_rgba8(width, height, rgba.as_raw())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::image_sink::encode_png;
    use palette_grid::Rgba;

    #[test]
    fn test_decode_bytes_png() {
        let source = RasterImage::new(
            2,
            1,
            vec![Rgba::new(1, 2, 3, 255), Rgba::new(200, 100, 50, 128)],
        )
        .unwrap();
        let bytes = encode_png(&source).unwrap();

        let decoded = decode_bytes(&bytes, "memory").unwrap();
        assert_eq!(decoded, source);
    }

    #[test]
    fn test_decode_bytes_garbage() {
        let err = decode_bytes(b"definitely not an image", "garbage.bin").unwrap_err();
        assert!(matches!(err, PipelineError::Decode { ref source_name, .. } if source_name == "garbage.bin"));
    }

    #[test]
    fn test_decode_missing_file() {
        let err = decode_path(Path::new("/nonexistent/pixelcut/input.png")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to decode /nonexistent/pixelcut/input.png"));
    }
}
