//! Nearest-sample downsampling.

use crate::api::MapError;
use crate::raster::RasterImage;

/// Output dimensions for downsampling a `width × height` image by `factor`.
///
/// # Errors
///
/// [`MapError::InvalidScale`] if `factor` is 0 or either output dimension
/// would be 0.
///
/// # Example
///
/// ```
/// use palette_grid::preprocess::downsampled_size;
///
/// assert_eq!(downsampled_size(100, 45, 30).unwrap(), (3, 1));
/// assert!(downsampled_size(100, 20, 30).is_err());
/// ```
pub fn downsampled_size(width: u32, height: u32, factor: u32) -> Result<(u32, u32), MapError> {
    let invalid = MapError::InvalidScale {
        factor,
        width,
        height,
    };
    if factor == 0 {
        return Err(invalid);
    }
    let (w, h) = (width / factor, height / factor);
    if w == 0 || h == 0 {
        return Err(invalid);
    }
    Ok((w, h))
}

/// Source coordinate sampled for destination coordinate `dst`: the source
/// pixel under the center of the destination cell.
#[inline]
fn sample_coord(dst: u32, src_len: u32, dst_len: u32) -> u32 {
    let src = (2 * dst as u64 + 1) * src_len as u64 / (2 * dst_len as u64);
    (src as u32).min(src_len - 1)
}

/// Reduce `image` to `floor(w/factor) × floor(h/factor)` pixels.
///
/// Each destination pixel copies exactly one source pixel (the one under
/// the center of its cell); no interpolation takes place. A factor of 1
/// returns an identical copy.
///
/// # Errors
///
/// [`MapError::InvalidScale`] if `factor` is 0 or an output dimension
/// collapses to 0.
///
/// # Example
///
/// ```
/// use palette_grid::{preprocess::downsample, RasterImage, Rgba};
///
/// let image = RasterImage::filled(9, 7, Rgba::opaque(1, 2, 3));
/// let small = downsample(&image, 3).unwrap();
/// assert_eq!((small.width(), small.height()), (3, 2));
/// ```
pub fn downsample(image: &RasterImage, factor: u32) -> Result<RasterImage, MapError> {
    let (src_w, src_h) = (image.width(), image.height());
    let (dst_w, dst_h) = downsampled_size(src_w, src_h, factor)?;

    let columns: Vec<usize> = (0..dst_w)
        .map(|x| sample_coord(x, src_w, dst_w) as usize)
        .collect();

    let src = image.pixels();
    let mut pixels = Vec::with_capacity(dst_w as usize * dst_h as usize);
    for y in 0..dst_h {
        let row = sample_coord(y, src_h, dst_h) as usize * src_w as usize;
        pixels.extend(columns.iter().map(|&x| src[row + x]));
    }

    RasterImage::new(dst_w, dst_h, pixels)
}
