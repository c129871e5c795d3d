use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use palette_grid::Palette;
use serde::Deserialize;

use crate::error::{ConfigError, PipelineError};

/// Configuration compiled into the binary, used when no file is given.
pub const EMBEDDED_CONFIG: &str = include_str!("../../config.yaml");

/// Environment variable naming a config file.
pub const CONFIG_FILE_ENV: &str = "CONFIG_FILE";

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Preset used when neither a preset nor explicit colors are requested
    #[serde(default)]
    pub default_preset: Option<String>,

    /// Default downsampling factor
    #[serde(default = "default_scale")]
    pub scale: u32,

    /// Named palettes: preset name -> ordered hex colors
    #[serde(default)]
    pub presets: BTreeMap<String, Vec<String>>,
}

fn default_scale() -> u32 {
    30
}

/// Where a configuration was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A YAML file on disk
    File(PathBuf),
    /// The copy compiled into the binary
    Embedded,
}

impl ConfigSource {
    /// Pick the source: `explicit` first, then `$CONFIG_FILE`, then embedded.
    ///
    /// An explicit path is always used, so a missing file surfaces as an
    /// error. A `$CONFIG_FILE` that does not exist falls back to embedded.
    pub fn resolve(explicit: Option<&Path>) -> Self {
        Self::resolve_with_env(explicit, std::env::var_os(CONFIG_FILE_ENV).map(PathBuf::from))
    }

    fn resolve_with_env(explicit: Option<&Path>, env: Option<PathBuf>) -> Self {
        if let Some(path) = explicit {
            return ConfigSource::File(path.to_path_buf());
        }
        match env {
            Some(path) if path.exists() => ConfigSource::File(path),
            Some(path) => {
                tracing::warn!(path = %path.display(), "Config file not found, using embedded");
                ConfigSource::Embedded
            }
            None => ConfigSource::Embedded,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Embedded => f.write_str("embedded"),
        }
    }
}

impl AppConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// The configuration compiled into the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_yaml(EMBEDDED_CONFIG)
    }

    /// Load configuration from `source`
    pub fn load(source: &ConfigSource) -> Result<Self, ConfigError> {
        let config = match source {
            ConfigSource::File(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                        path: path.clone(),
                        source,
                    })?;
                Self::from_yaml(&content)?
            }
            ConfigSource::Embedded => Self::embedded()?,
        };
        tracing::debug!(
            %source,
            presets = config.presets.len(),
            scale = config.scale,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Build the palette for preset `name`
    pub fn palette(&self, name: &str) -> Result<Palette, PipelineError> {
        let hex = self
            .presets
            .get(name)
            .ok_or_else(|| PipelineError::UnknownPreset(name.to_string()))?;
        Palette::from_hex(hex).map_err(|source| {
            ConfigError::Palette {
                preset: name.to_string(),
                source,
            }
            .into()
        })
    }

    /// Name of the default preset, if configured
    pub fn default_preset(&self) -> Option<&str> {
        self.default_preset.as_deref()
    }

    /// Preset names in sorted order
    pub fn preset_names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_preset: None,
            scale: default_scale(),
            presets: BTreeMap::new(),
        }
    }
}
