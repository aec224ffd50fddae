//! Error types for values and configuration owned by phonekit-core.
//!
//! Registry loading and number formatting carry their own error enums in
//! their crates; this module only covers dial code parsing and the
//! configuration file.

use thiserror::Error;

/// A dial code that is not `+` followed by 1-4 digits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid dial code '{code}': must be '+' followed by 1-4 digits")]
pub struct InvalidDialCode {
    /// The normalized code that was rejected
    pub code: String,
}

/// Errors from loading, overriding, or saving `config.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No home directory to derive the XDG config path from
    #[error("could not determine the phonekit config directory")]
    NoConfigDir,

    /// An explicitly requested config file does not exist
    #[error("config file not found at {path}")]
    NotFound {
        /// Requested path
        path: String,
    },

    /// `config.toml` is not valid TOML for [`crate::AppConfig`]
    #[error("failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// [`crate::AppConfig`] could not be written as TOML
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// Reading or writing the config file failed
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A file value or environment override is out of range
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Dotted field name or environment variable
        field: String,
        /// What was wrong with it
        reason: String,
    },
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
