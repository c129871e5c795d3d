//! Unified error type for the palette-grid public API.

use thiserror::Error;

use crate::palette::PaletteError;

/// Unified error type for the palette-grid public API.
///
/// Every failure is deterministic for fixed inputs; none is worth retrying
/// without changing the inputs.
///
/// # Example
///
/// ```
/// use palette_grid::{MapError, Palette};
///
/// fn load() -> Result<Palette, MapError> {
///     Ok(Palette::from_hex(&["#000000", "#FFFFFF"])?)
/// }
/// assert!(load().is_ok());
///
/// let empty: [&str; 0] = [];
/// let err: MapError = Palette::from_hex(&empty).unwrap_err().into();
/// assert!(matches!(err, MapError::EmptyPalette));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    /// Scale factor is zero, or the downsampled image would have a zero dimension
    #[error("invalid scale factor {factor} for {width}x{height} image")]
    InvalidScale {
        /// Requested factor
        factor: u32,
        /// Source width
        width: u32,
        /// Source height
        height: u32,
    },
    /// Palette has no entries; nothing to classify against
    #[error("palette is empty")]
    EmptyPalette,
    /// Any other palette validation failure
    #[error("palette error: {0}")]
    Palette(PaletteError),
    /// A pixel or index buffer does not match its declared dimensions
    #[error("buffer of {len} cells does not match {width}x{height}")]
    GridShape {
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
        /// Actual number of cells
        len: usize,
    },
    /// An index grid references a color the palette does not have
    #[error("index {index} at cell {cell} is out of range for a palette of {palette_len} colors")]
    IndexOutOfRange {
        /// The offending index value
        index: usize,
        /// Row-major cell position
        cell: usize,
        /// Palette size
        palette_len: usize,
    },
}

impl From<PaletteError> for MapError {
    fn from(err: PaletteError) -> Self {
        match err {
            PaletteError::EmptyPalette => MapError::EmptyPalette,
            other => MapError::Palette(other),
        }
    }
}
