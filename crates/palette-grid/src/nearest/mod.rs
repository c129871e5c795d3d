//! Nearest-neighbor search over small fixed point sets.
//!
//! Both palette-to-palette matching (Lab space) and bulk pixel
//! classification (RGB space) build a [`KdTree`] once over the palette and
//! query it many times.

mod kdtree;

pub use kdtree::{KdTree, Neighbor};
