//! Country record and database document types.
//!
//! These mirror the JSON database layout: a `metadata` block followed by a
//! `countries` array whose order is the registry order used for every
//! first-match lookup.

use crate::error::{RegistryError, Result};
use chrono::NaiveDate;
use phonekit_core::DialCode;
use serde::{Deserialize, Serialize};

/// Complete country database as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryDocument {
    /// Database metadata
    pub metadata: RegistryMetadata,

    /// Country records in registry order
    pub countries: Vec<CountryRecord>,
}

/// Descriptive metadata shipped with the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryMetadata {
    /// Database version string
    pub version: String,

    /// Date the data was last updated (YYYY-MM-DD)
    pub last_updated: NaiveDate,

    /// Number of records the database declares
    pub total_countries: usize,

    /// Free-form description
    pub description: String,

    /// Data license
    pub license: String,
}

impl RegistryMetadata {
    /// Metadata for registries built from in-memory records.
    #[must_use]
    pub fn synthetic(total_countries: usize) -> Self {
        Self {
            version: "0.0.0".to_string(),
            last_updated: NaiveDate::default(),
            total_countries,
            description: "in-memory country table".to_string(),
            license: String::new(),
        }
    }
}

/// A single country or territory with its dial code.
///
/// Neither `iso2` nor `dial_code` is guaranteed unique across records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    /// Display name
    pub name: String,

    /// ISO 3166-1 alpha-2 code
    pub iso2: String,

    /// ISO 3166-1 alpha-3 code
    pub iso3: String,

    /// International dial code, e.g. `+44`
    pub dial_code: DialCode,

    /// Flag glyph, cosmetic only
    #[serde(default)]
    pub flag: String,
}

impl CountryRecord {
    /// Create a record, normalizing the dial code.
    ///
    /// # Errors
    /// Returns error if the dial code is malformed.
    pub fn new(
        name: impl Into<String>,
        iso2: impl Into<String>,
        iso3: impl Into<String>,
        dial_code: &str,
    ) -> Result<Self> {
        let name = name.into();
        let dial_code = DialCode::new(dial_code).map_err(|e| RegistryError::ValidationError {
            record: name.clone(),
            reason: e.to_string(),
        })?;

        let record = Self {
            name,
            iso2: iso2.into(),
            iso3: iso3.into(),
            dial_code,
            flag: String::new(),
        };
        record.validate()?;
        Ok(record)
    }

    /// Dial code digits without the leading `+`.
    #[must_use]
    pub fn dial_digits(&self) -> &str {
        self.dial_code.digits()
    }

    /// Validate the record for completeness and correctness.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(RegistryError::ValidationError {
                record: format!("{} ({})", self.iso2, self.dial_code),
                reason: "country name cannot be empty".to_string(),
            });
        }

        if !is_alpha_code(&self.iso2, 2) {
            return Err(RegistryError::ValidationError {
                record: self.name.clone(),
                reason: format!("iso2 must be 2 ASCII letters, got '{}'", self.iso2),
            });
        }

        if !is_alpha_code(&self.iso3, 3) {
            return Err(RegistryError::ValidationError {
                record: self.name.clone(),
                reason: format!("iso3 must be 3 ASCII letters, got '{}'", self.iso3),
            });
        }

        self.dial_code
            .check()
            .map_err(|e| RegistryError::ValidationError {
                record: self.name.clone(),
                reason: e.to_string(),
            })
    }
}

fn is_alpha_code(code: &str, len: usize) -> bool {
    code.len() == len && code.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new_normalizes_dial_code() {
        let record = CountryRecord::new("Germany", "DE", "DEU", "49").expect("valid record");
        assert_eq!(record.dial_code.as_str(), "+49");
        assert_eq!(record.dial_digits(), "49");
        assert!(record.flag.is_empty());
    }

    #[test]
    fn test_record_rejects_bad_fields() {
        assert!(CountryRecord::new("", "DE", "DEU", "+49").is_err());
        assert!(CountryRecord::new("Germany", "DEU", "DEU", "+49").is_err());
        assert!(CountryRecord::new("Germany", "DE", "D1U", "+49").is_err());
        assert!(CountryRecord::new("Germany", "DE", "DEU", "+49999").is_err());
    }

    #[test]
    fn test_record_json_layout() {
        let json = r#"{"name":"Jamaica","iso2":"JM","iso3":"JAM","dialCode":"+1876","flag":"🇯🇲"}"#;
        let record: CountryRecord = serde_json::from_str(json).expect("parse record");
        assert_eq!(record.name, "Jamaica");
        assert_eq!(record.dial_code.as_str(), "+1876");
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_validate_catches_deserialized_dial_code() {
        let json = r#"{"name":"Jamaica","iso2":"JM","iso3":"JAM","dialCode":"1876"}"#;
        let record: CountryRecord = serde_json::from_str(json).expect("parse record");
        assert!(matches!(
            record.validate(),
            Err(RegistryError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_metadata_json_layout() {
        let json = r#"{
            "version": "1.2.0",
            "lastUpdated": "2024-06-01",
            "totalCountries": 240,
            "description": "dial codes",
            "license": "MIT"
        }"#;
        let metadata: RegistryMetadata = serde_json::from_str(json).expect("parse metadata");
        assert_eq!(metadata.total_countries, 240);
        assert_eq!(
            metadata.last_updated,
            NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
        );
    }
}
