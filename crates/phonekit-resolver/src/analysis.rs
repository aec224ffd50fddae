//! Combined detection and formatting report.

use crate::{digits::extract_digits, error::FormatError, resolver::Resolver};
use phonekit_core::PhoneFormat;
use phonekit_registry::CountryRecord;
use serde::Serialize;

/// Everything phonekit can say about one input.
///
/// Finding no country is not a failure: `valid` stays true as long as digits
/// were extracted, with `possible_countries` empty and `formats` unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// Whether the input contained digits to analyze
    pub valid: bool,
    /// Why analysis stopped, when `valid` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ReportError>,
    /// The input as given
    pub original: String,
    /// Extracted digits
    pub digits: String,
    /// Number of extracted digits
    pub digit_count: usize,
    /// First country of the longest detected dial code
    pub detected_country: Option<CountrySummary>,
    /// Every detected dial code, longest first
    pub possible_countries: Vec<PossibleCountry>,
    /// The number in every format, when a country was detected
    pub formats: Option<FormatSet>,
}

/// Error kind and message carried in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportError {
    /// Stable code, see [`FormatError::code`]
    pub code: String,
    /// Human-readable message
    pub message: String,
}

impl From<&FormatError> for ReportError {
    fn from(err: &FormatError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

/// Owned copy of the identifying fields of a country record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountrySummary {
    /// Display name
    pub name: String,
    /// ISO2 code
    pub iso2: String,
    /// ISO3 code
    pub iso3: String,
    /// Dial code
    pub dial_code: String,
    /// Flag glyph
    pub flag: String,
}

impl From<&CountryRecord> for CountrySummary {
    fn from(record: &CountryRecord) -> Self {
        Self {
            name: record.name.clone(),
            iso2: record.iso2.clone(),
            iso3: record.iso3.clone(),
            dial_code: record.dial_code.to_string(),
            flag: record.flag.clone(),
        }
    }
}

/// One detected dial code and the countries that share it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PossibleCountry {
    /// The matched dial code
    pub dial_code: String,
    /// Digits after the dial code
    pub national_number: String,
    /// Countries carrying the dial code, in registry order
    pub countries: Vec<CountrySummary>,
}

/// The number rendered in each format; `None` where rendering failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatSet {
    /// US format
    pub us: Option<String>,
    /// International format
    pub international: Option<String>,
    /// National format
    pub national: Option<String>,
    /// E.164 format
    pub e164: Option<String>,
}

impl AnalysisReport {
    fn failed(input: &str, err: &FormatError) -> Self {
        Self {
            valid: false,
            error: Some(err.into()),
            original: input.to_string(),
            digits: String::new(),
            digit_count: 0,
            detected_country: None,
            possible_countries: Vec::new(),
            formats: None,
        }
    }

    pub(crate) fn build(resolver: &Resolver, input: &str) -> Self {
        if input.is_empty() {
            return Self::failed(input, &FormatError::MissingInput);
        }

        let digits = extract_digits(input);
        if digits.is_empty() {
            return Self::failed(input, &FormatError::NoDigitsFound);
        }

        let candidates = resolver.detect(&digits);
        let detected = candidates
            .first()
            .and_then(|candidate| candidate.primary_country());

        let formats = detected.map(|country| {
            let render = |format| resolver.render_with(format, &digits, Some(country)).ok();
            FormatSet {
                us: render(PhoneFormat::Us),
                international: render(PhoneFormat::International),
                // Same path as national formatting without a country: the
                // detected prefix is dropped before rendering.
                national: resolver
                    .render_with(PhoneFormat::National, &digits, None)
                    .ok(),
                e164: render(PhoneFormat::E164),
            }
        });

        let possible_countries = candidates
            .iter()
            .map(|candidate| PossibleCountry {
                dial_code: candidate.dial_code.clone(),
                national_number: candidate.remaining_digits.clone(),
                countries: candidate
                    .countries
                    .iter()
                    .map(|record| CountrySummary::from(*record))
                    .collect(),
            })
            .collect();

        Self {
            valid: true,
            error: None,
            original: input.to_string(),
            digit_count: digits.len(),
            detected_country: detected.map(CountrySummary::from),
            possible_countries,
            formats,
            digits,
        }
    }
}
