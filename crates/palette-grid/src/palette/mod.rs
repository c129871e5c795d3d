//! Palette types and utilities

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::Palette;
