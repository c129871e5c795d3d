pub mod config;

pub use config::{AppConfig, ConfigSource, CONFIG_FILE_ENV, EMBEDDED_CONFIG};
