//! Outputs derived from classification.
//!
//! - [`IndexGrid`] / [`OccurrenceCounts`]: the canonical result
//! - [`render()`]: the visual reconstruction
//! - [`export()`] / [`TabularDocument`]: the tabular encoding

mod index_grid;
mod render;
pub mod table;

pub use index_grid::{IndexGrid, OccurrenceCounts};
pub use render::render;
pub use table::{export, Cell, TabularDocument};
