//! Image sinks: persist a rendered raster.

use std::io::Cursor;
use std::path::PathBuf;

use palette_grid::RasterImage;

use crate::error::PipelineError;

/// Destination for a rendered image.
pub trait ImageSink {
    /// Human-readable destination, used in logs and errors
    fn destination(&self) -> String;

    /// Persist `image`
    fn write_image(&self, image: &RasterImage) -> Result<(), PipelineError>;
}

/// Writes an RGBA PNG file.
#[derive(Debug, Clone)]
pub struct PngFileSink {
    path: PathBuf,
}

impl PngFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImageSink for PngFileSink {
    fn destination(&self) -> String {
        self.path.display().to_string()
    }

    fn write_image(&self, image: &RasterImage) -> Result<(), PipelineError> {
        let bytes =
            encode_png(image).map_err(|e| PipelineError::sink_write(self.destination(), e))?;
        std::fs::write(&self.path, bytes)
            .map_err(|e| PipelineError::sink_write(self.destination(), e))
    }
}

/// Encode a raster as 8-bit RGBA PNG.
pub fn encode_png(image: &RasterImage) -> Result<Vec<u8>, String> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().map_err(|e| e.to_string())?;
        writer
            .write_image_data(&image.to_rgba8())
            .map_err(|e| e.to_string())?;
    }
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette_grid::Rgba;

    #[test]
    fn test_encode_png_signature() {
        let image = RasterImage::filled(3, 2, Rgba::opaque(10, 20, 30));
        let bytes = encode_png(&image).unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let sink = PngFileSink::new("/nonexistent/pixelcut/out.png");
        let err = sink
            .write_image(&RasterImage::filled(1, 1, Rgba::opaque(0, 0, 0)))
            .unwrap_err();
        assert!(matches!(
            err,
            PipelineError::SinkWrite { ref destination, .. } if destination == "/nonexistent/pixelcut/out.png"
        ));
    }
}
