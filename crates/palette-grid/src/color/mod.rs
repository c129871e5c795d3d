//! Color types and conversion utilities
//!
//! - [`Rgba`]: 8-bit storage type for palettes and pixels, hex parsing
//! - [`Srgb`]: normalized gamma-encoded channels, alpha dropped
//! - [`LinearRgb`]: linear light, the bridge to the perceptual spaces
//! - [`Lab`]: CIE L\*a\*b\* (D65), default space for palette matching
//! - [`Oklab`]: alternative perceptual space
//!
//! # Example
//!
//! ```
//! use palette_grid::{Lab, LinearRgb, Rgba, Srgb};
//!
//! let color: Rgba = "#FE0001".parse().unwrap();
//! let srgb = Srgb::from(color);
//! let lab = Lab::from(LinearRgb::from(srgb));
//! assert!(lab.a > 70.0);
//! ```

mod lab;
mod linear_rgb;
mod lut;
mod oklab;
mod rgba;
mod srgb;

pub use lab::Lab;
pub use linear_rgb::LinearRgb;
pub use oklab::Oklab;
pub use rgba::Rgba;
pub use srgb::Srgb;
