//! Error types for palette operations

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 6 or 8 digits after stripping '#')
    #[error("invalid hex color length {0} (expected 6 or 8 digits)")]
    InvalidLength(usize),
    /// A character other than a hex digit after the optional '#'
    #[error("invalid hex character {0:?}")]
    InvalidHex(char),
}

/// Error type for palette validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// No colors provided in palette
    #[error("palette cannot be empty")]
    EmptyPalette,
    /// Two entries share the same RGB value
    #[error("duplicate color {color} at index {index} (first seen at index {first})")]
    DuplicateColor {
        /// Index where the duplicate was found
        index: usize,
        /// Index of the earlier entry with the same RGB value
        first: usize,
        /// The duplicated color as hex
        color: String,
    },
    /// Invalid hex color string
    #[error("invalid color at index {index}: {source}")]
    ParseColor {
        /// Position of the offending string
        index: usize,
        /// Underlying parse failure
        #[source]
        source: ParseColorError,
    },
}
