//! Phonekit Core - Foundation crate for the phonekit number toolkit.
//!
//! This crate provides shared types, error handling, and configuration
//! management that the registry, resolver, and CLI crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Dial code and configuration errors using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Shared newtypes and enums (`DialCode`, `PhoneFormat`)
//!
//! # Example
//!
//! ```rust
//! use phonekit_core::{AppConfig, DialCode, PhoneFormat};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::default();
//! assert_eq!(config.formatting.default_format, PhoneFormat::Us);
//!
//! let code = DialCode::new("44")?;
//! assert_eq!(code.as_str(), "+44");
//! assert_eq!(code.digits(), "44");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, FormattingConfig, LoggingConfig, RegistryConfig};
pub use error::{ConfigError, ConfigResult, InvalidDialCode};
pub use types::{normalize_dial_code, DialCode, PhoneFormat, UnsupportedFormat};
