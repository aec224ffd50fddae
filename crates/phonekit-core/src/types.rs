//! Shared types used across phonekit.
//!
//! This module defines the newtypes and enums that the registry and the
//! resolver agree on.

use crate::error::InvalidDialCode;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Normalize a dial code for lookup: trim it and prepend `+` when absent.
///
/// No validation happens here; a malformed code simply never matches a
/// registry record.
#[must_use]
pub fn normalize_dial_code(code: &str) -> String {
    let code = code.trim();
    if code.starts_with('+') {
        code.to_string()
    } else {
        format!("+{code}")
    }
}

/// Newtype for international dial codes with validation.
///
/// Dial codes are `+` followed by 1-4 digits (e.g. `+1`, `+44`, `+1868`).
/// Dial codes are not unique across countries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DialCode(String);

impl DialCode {
    /// Create a new `DialCode`, adding the leading `+` when missing.
    ///
    /// # Errors
    /// Returns error if the code is not `+` followed by 1-4 digits.
    pub fn new(code: impl AsRef<str>) -> Result<Self, InvalidDialCode> {
        let code = normalize_dial_code(code.as_ref());
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Get the dial code including the leading `+`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the digits after the leading `+`.
    #[must_use]
    pub fn digits(&self) -> &str {
        self.0.strip_prefix('+').unwrap_or(&self.0)
    }

    /// Numeric value of the digits, used for ordering dial codes.
    #[must_use]
    pub fn numeric_value(&self) -> u32 {
        self.digits().parse().unwrap_or(u32::MAX)
    }

    /// Check that this value still satisfies the dial code format.
    ///
    /// Deserialized values bypass [`DialCode::new`], so loaders call this
    /// before trusting a record.
    pub fn check(&self) -> Result<(), InvalidDialCode> {
        Self::validate(&self.0)
    }

    fn validate(code: &str) -> Result<(), InvalidDialCode> {
        static DIAL_CODE_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex =
            DIAL_CODE_REGEX.get_or_init(|| Regex::new(r"^\+[0-9]{1,4}$").expect("valid regex"));

        if regex.is_match(code) {
            Ok(())
        } else {
            Err(InvalidDialCode {
                code: code.to_string(),
            })
        }
    }
}

impl fmt::Display for DialCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl FromStr for DialCode {
    type Err = InvalidDialCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Output formats a phone number can be rendered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneFormat {
    /// North American display format: `+1 (212) 869-1246`
    #[default]
    Us,
    /// Dial code followed by the national number: `+49 15123456789`
    International,
    /// National display format, `(212) 869-1246` for US/Canada
    National,
    /// ITU-T E.164: `+4915123456789`
    E164,
}

impl PhoneFormat {
    /// Canonical lowercase name of the format.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::International => "international",
            Self::National => "national",
            Self::E164 => "e164",
        }
    }
}

impl fmt::Display for PhoneFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A format name that is not one of the recognized [`PhoneFormat`] values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported format '{0}': expected one of us, international, national, e164")]
pub struct UnsupportedFormat(pub String);

impl FromStr for PhoneFormat {
    type Err = UnsupportedFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "us" => Ok(Self::Us),
            "international" => Ok(Self::International),
            "national" => Ok(Self::National),
            "e164" => Ok(Self::E164),
            _ => Err(UnsupportedFormat(s.to_string())),
        }
    }
}
