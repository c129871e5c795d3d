//! Pixelcut - turn images into palette-constrained grids
//!
//! I/O around the `palette-grid` core: decoding, PNG and xlsx sinks,
//! configuration and the conversion pipeline.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
