//! Image preparation before classification.
//!
//! Currently a single step: nearest-sample downsampling by an integer
//! factor. Downsampling never blends pixels, so flat regions of the source
//! keep their exact color and no in-between colors absent from the palette
//! are introduced.

mod downsample;

pub use downsample::{downsample, downsampled_size};
