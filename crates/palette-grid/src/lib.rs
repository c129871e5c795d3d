#![allow(clippy::excessive_precision, clippy::module_inception)]

//! palette-grid: palette-constrained downsampling and classification
//!
//! Turns a raster image into a coarse grid of palette indices, e.g. to plan
//! a mosaic of colored paper squares, and derives a visual reconstruction
//! and a tabular encoding (index per cell plus per-color usage counts) from
//! that grid.
//!
//! # Quick Start
//!
//! The [`PaletteMapper`] builder is the primary entry point:
//!
//! ```
//! use palette_grid::{export, render, Palette, PaletteMapper, RasterImage, Rgba};
//!
//! let palette = Palette::from_hex(&["#000000", "#FFFFFF", "#FF0000"]).unwrap();
//! let mapper = PaletteMapper::new(palette).unwrap().scale(4);
//!
//! let image = RasterImage::filled(16, 8, Rgba::opaque(230, 20, 30));
//! let grid = mapper.quantize(&image).unwrap();
//! assert_eq!((grid.width(), grid.height()), (4, 2));
//!
//! let preview = render(&grid);
//! assert_eq!(preview.pixel(0, 0), Rgba::opaque(255, 0, 0));
//!
//! let table = export(&grid);
//! assert_eq!(table.counts().as_slice(), &[0, 0, 8]);
//! ```
//!
//! # Normalizing a Palette
//!
//! Ad-hoc color lists can be snapped onto a reference palette before use:
//!
//! ```
//! use palette_grid::{match_palette, Palette, Rgba};
//!
//! let reference = Palette::from_hex(&["#FF0000", "#00FF00"]).unwrap();
//! let picked: Rgba = "#FE0001".parse().unwrap();
//!
//! let matched = match_palette(&[picked], &reference).unwrap();
//! assert_eq!(matched[0].to_hex_rgb(), "#FF0000");
//! ```
//!
//! # Color Science
//!
//! Two distance metrics are used, on purpose:
//!
//! | Operation | Space | Metric |
//! |-----------|-------|--------|
//! | [`match_palette()`] / [`PaletteMatcher`] | CIE L\*a\*b\* (D65), or [`Oklab`] | Euclidean |
//! | [`classify()`] / [`PixelClassifier`] | 8-bit RGB, alpha excluded | Euclidean |
//!
//! Palette matching runs once per palette entry, so it can afford the
//! sRGB → linear → XYZ → Lab conversion and gets distances that track
//! perceived difference. Classification runs once per pixel and compares
//! raw channel values. A pixel can therefore land on a different entry than
//! the perceptual matcher would pick; the two are not interchangeable.
//!
//! ```text
//! Rgba (u8) ──> Srgb (0..1) ──> LinearRgb ──> XYZ ──> Lab      matcher
//!          └──> [f32; 3] (0..255)                              classifier
//! ```
//!
//! Both paths search a [`nearest::KdTree`] built once over the palette.
//! Among equidistant entries the tree's first hit wins.
//!
//! # Downsampling
//!
//! [`downsample()`] reduces an image by an integer factor to
//! `floor(w/f) × floor(h/f)` pixels, each copying the source pixel under
//! its cell center. Nothing is blended, so flat source regions keep their
//! exact colors.

pub mod api;
pub mod classify;
pub mod color;
pub mod matcher;
pub mod nearest;
pub mod output;
pub mod palette;
pub mod preprocess;
pub mod raster;

#[cfg(test)]
mod domain_tests;

pub use api::{MapError, PaletteMapper};
pub use classify::{classify, PixelClassifier};
pub use color::{Lab, LinearRgb, Oklab, Rgba, Srgb};
pub use matcher::{match_palette, PaletteMatcher, PerceptualSpace};
pub use output::{export, render, IndexGrid, OccurrenceCounts, TabularDocument};
pub use palette::{Palette, PaletteError, ParseColorError};
pub use preprocess::downsample;
pub use raster::RasterImage;
