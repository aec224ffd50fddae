//! Error types for the registry subsystem.

use thiserror::Error;

/// Errors that can occur while loading a country database.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Failed to read the database file
    #[error("failed to load country database from {path}: {source}")]
    LoadError {
        /// Path to the database file
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the database JSON
    #[error("failed to parse country database JSON in {path}: {source}")]
    ParseError {
        /// Path to the database file (`<bundled>` for the embedded copy)
        path: String,
        /// JSON parse error
        #[source]
        source: serde_json::Error,
    },

    /// A country record failed validation
    #[error("invalid country record {record}: {reason}")]
    ValidationError {
        /// Name or position of the offending record
        record: String,
        /// Reason for validation failure
        reason: String,
    },

    /// Database file not found
    #[error("country database not found at {path}")]
    FileNotFound {
        /// Expected file path
        path: String,
    },

    /// The database contains no records
    #[error("country database contains no records")]
    Empty,
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
