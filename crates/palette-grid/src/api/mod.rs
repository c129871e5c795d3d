//! Public API for the palette-grid crate.
//!
//! This module provides the high-level API: [`PaletteMapper`] builder and
//! [`MapError`] unified error type.

mod builder;
mod error;

pub use builder::{PaletteMapper, DEFAULT_SCALE};
pub use error::MapError;
