//! Configuration management for phonekit.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use crate::types::PhoneFormat;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration.
///
/// This is loaded from `~/.config/phonekit/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Country database settings
    pub registry: RegistryConfig,
    /// Default formatting behavior
    pub formatting: FormattingConfig,
    /// Log output settings
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the default location, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file.
    ///
    /// Unlike [`AppConfig::load`], a missing file is an error here.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            });
        }

        tracing::debug!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `PHONEKIT_REGISTRY_PATH`: Override the country database file
    /// - `PHONEKIT_DEFAULT_FORMAT`: Override the default output format
    /// - `PHONEKIT_AUTO_DETECT`: Override country auto-detection (true/false)
    /// - `PHONEKIT_STRICT`: Override strict mode (true/false)
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides from an environment-like lookup.
    ///
    /// Boolean values that fail to parse are ignored; an unknown format name
    /// is rejected.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("PHONEKIT_REGISTRY_PATH") {
            if !val.is_empty() {
                tracing::debug!("Override registry.path from env: {}", val);
                self.registry.path = Some(PathBuf::from(val));
            }
        }

        if let Some(val) = lookup("PHONEKIT_DEFAULT_FORMAT") {
            let format = val
                .parse::<PhoneFormat>()
                .map_err(|e| ConfigError::InvalidValue {
                    field: "formatting.default_format".to_string(),
                    reason: e.to_string(),
                })?;
            self.formatting.default_format = format;
            tracing::debug!("Override formatting.default_format from env: {}", format);
        }

        if let Some(val) = lookup("PHONEKIT_AUTO_DETECT") {
            if let Ok(auto_detect) = val.parse() {
                self.formatting.auto_detect = auto_detect;
                tracing::debug!("Override formatting.auto_detect from env: {}", auto_detect);
            }
        }

        if let Some(val) = lookup("PHONEKIT_STRICT") {
            if let Ok(strict) = val.parse() {
                self.formatting.strict = strict;
                tracing::debug!("Override formatting.strict from env: {}", strict);
            }
        }

        Ok(())
    }

    /// Save configuration to the default location.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> ConfigResult<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to an explicit file.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        let config_dir = path.parent().ok_or_else(|| ConfigError::InvalidValue {
            field: "config_path".to_string(),
            reason: "no parent directory".to_string(),
        })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/phonekit/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs =
            ProjectDirs::from("com", "phonekit", "phonekit").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Country database settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// External JSON database; the bundled database is used when unset
    pub path: Option<PathBuf>,
}

/// Default formatting behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingConfig {
    /// Format used when none is requested
    pub default_format: PhoneFormat,
    /// Detect the country from the leading digits when no country is given
    pub auto_detect: bool,
    /// Enable strict validation and rendering
    pub strict: bool,
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn,phonekit=info".to_string(),
        }
    }
}
