//! Error types for formatting operations.

use phonekit_core::{PhoneFormat, UnsupportedFormat};
use thiserror::Error;

/// Reasons a phone number cannot be formatted.
///
/// Every variant is a pure function of the input and the registry: the same
/// call always fails the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The input string was empty
    #[error("phone number is required")]
    MissingInput,

    /// The input contained no digits
    #[error("no digits found in phone number")]
    NoDigitsFound,

    /// A country hint matched no ISO2, ISO3, or dial code
    #[error("unknown country: {hint}")]
    UnknownCountry {
        /// The hint as given
        hint: String,
    },

    /// The requested format name is not recognized
    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormat),

    /// Digit count does not fit the US format
    #[error("invalid length for US format: expected 7, 10, or 11 digits, got {digits}")]
    InvalidLength {
        /// Number of digits in the input
        digits: usize,
    },

    /// An 11-digit US number did not start with the country code 1
    #[error("11-digit US number must start with 1, got {digits}")]
    InvalidCountryPrefix {
        /// The offending digits
        digits: String,
    },

    /// The format needs a country and none could be resolved
    #[error("{format} format requires a country code or auto-detection")]
    MissingCountryContext {
        /// The requested format
        format: PhoneFormat,
    },

    /// Strict international rendering left no national digits
    #[error("no national number after removing dial code {dial_code}")]
    EmptyNationalNumber {
        /// The dial code that was stripped
        dial_code: String,
    },
}

impl FormatError {
    /// Stable machine-readable code for the error kind.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingInput => "MISSING_INPUT",
            Self::NoDigitsFound => "NO_DIGITS_FOUND",
            Self::UnknownCountry { .. } => "UNKNOWN_COUNTRY",
            Self::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            Self::InvalidLength { .. } => "INVALID_LENGTH",
            Self::InvalidCountryPrefix { .. } => "INVALID_COUNTRY_PREFIX",
            Self::MissingCountryContext { .. } => "MISSING_COUNTRY_CONTEXT",
            Self::EmptyNationalNumber { .. } => "EMPTY_NATIONAL_NUMBER",
        }
    }
}

/// Result type for formatting operations.
pub type Result<T> = std::result::Result<T, FormatError>;
