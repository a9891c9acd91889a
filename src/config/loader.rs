use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/slidedeck/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("slidedeck").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = Self::parse_at(&content, path)?;

        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parses and validates TOML config text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Self::parse_at(content, Path::new("<inline>"))
    }

    fn parse_at(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Timer tick and event poll intervals are non-zero
    /// - Swipe distance is finite and not negative
    /// - Cell sizes are finite and positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timer.tick_interval_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "timer.tick_interval_ms must be greater than zero".to_string(),
            });
        }

        if self.ui.poll_interval_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.poll_interval_ms must be greater than zero".to_string(),
            });
        }

        let distance = self.gesture.min_swipe_distance;
        if !distance.is_finite() || distance < 0.0 {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "gesture.min_swipe_distance must be a non-negative number, got {}",
                    distance
                ),
            });
        }

        for (name, value) in [
            ("gesture.cell_width", self.gesture.cell_width),
            ("gesture.cell_height", self.gesture.cell_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValidationError {
                    message: format!("{} must be a positive number, got {}", name, value),
                });
            }
        }

        Ok(())
    }
}
