use std::path::PathBuf;

use palette_grid::{MapError, PaletteError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to decode {source_name}: {source}")]
    Decode {
        source_name: String,
        source: image::ImageError,
    },

    #[error("Failed to write {destination}: {message}")]
    SinkWrite {
        destination: String,
        message: String,
    },

    #[error(transparent)]
    Map(#[from] MapError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unknown palette preset: {0}")]
    UnknownPreset(String),
}

impl PipelineError {
    /// Build a `SinkWrite` error for `destination` from any displayable cause.
    pub fn sink_write(destination: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        PipelineError::SinkWrite {
            destination: destination.into(),
            message: cause.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Preset {preset}: {source}")]
    Palette {
        preset: String,
        source: PaletteError,
    },
}
