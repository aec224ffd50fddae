//! Country inference from leading digits.
//!
//! Every prefix of the digit string, from one digit up to the registry's
//! longest dial code, is looked up as a dial code. Each prefix with at least
//! one matching record becomes a candidate, and candidates are ordered
//! longest prefix first.

use crate::digits::extract_digits;
use phonekit_registry::{CountryRecord, CountryRegistry};
use serde::Serialize;
use std::cmp::Reverse;
use tracing::debug;

/// One dial-code prefix of the input that exists in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectionCandidate<'r> {
    /// The matched prefix as a dial code, e.g. `+49`
    pub dial_code: String,
    /// Every record carrying that dial code, in registry order
    pub countries: Vec<&'r CountryRecord>,
    /// Input digits with the prefix removed
    pub remaining_digits: String,
}

impl<'r> DetectionCandidate<'r> {
    /// First country in registry order.
    #[must_use]
    pub fn primary_country(&self) -> Option<&'r CountryRecord> {
        self.countries.first().copied()
    }
}

/// Find every dial-code prefix of `digits`, longest first.
///
/// Non-digit characters are ignored. Prefixes are tried up to `max_prefix_len`
/// digits. Empty input yields no candidates.
#[must_use]
pub fn detect<'r>(
    registry: &'r CountryRegistry,
    digits: &str,
    max_prefix_len: usize,
) -> Vec<DetectionCandidate<'r>> {
    let digits = extract_digits(digits);
    let depth = max_prefix_len.min(digits.len());

    let mut candidates: Vec<DetectionCandidate<'r>> = (1..=depth)
        .filter_map(|len| {
            let (prefix, rest) = digits.split_at(len);
            let countries = registry.all_by_dial_code(prefix);
            (!countries.is_empty()).then(|| DetectionCandidate {
                dial_code: format!("+{prefix}"),
                countries,
                remaining_digits: rest.to_string(),
            })
        })
        .collect();

    candidates.sort_by_key(|candidate| Reverse(candidate.dial_code.len()));

    debug!(
        depth,
        candidates = candidates.len(),
        best = candidates.first().map(|c| c.dial_code.as_str()),
        "detected dial code prefixes"
    );

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, iso2: &str, iso3: &str, dial_code: &str) -> CountryRecord {
        CountryRecord::new(name, iso2, iso3, dial_code).expect("valid record")
    }

    fn create_test_registry() -> CountryRegistry {
        CountryRegistry::from_records(vec![
            record("Canada", "CA", "CAN", "+1"),
            record("Germany", "DE", "DEU", "+49"),
            record("Jamaica", "JM", "JAM", "+1876"),
            record("Seychelles", "SC", "SYC", "+248"),
            record("Testonia", "TT", "TTT", "+4"),
            record("United States", "US", "USA", "+1"),
        ])
        .expect("valid registry")
    }

    #[test]
    fn test_longest_prefix_first() {
        let registry = create_test_registry();
        let candidates = detect(&registry, "4915123456789", 4);

        let codes: Vec<&str> = candidates.iter().map(|c| c.dial_code.as_str()).collect();
        assert_eq!(codes, vec!["+49", "+4"]);
        assert_eq!(candidates[0].remaining_digits, "15123456789");
        assert_eq!(candidates[1].remaining_digits, "915123456789");
    }

    #[test]
    fn test_shared_dial_code_keeps_registry_order() {
        let registry = create_test_registry();
        let candidates = detect(&registry, "12128691246", 4);

        assert_eq!(candidates.len(), 1);
        let names: Vec<&str> = candidates[0]
            .countries
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Canada", "United States"]);
        assert_eq!(
            candidates[0].primary_country().map(|r| r.iso2.as_str()),
            Some("CA")
        );
    }

    #[test]
    fn test_four_digit_code_beats_one_digit_code() {
        let registry = create_test_registry();
        let candidates = detect(&registry, "18765551234", 4);

        let codes: Vec<&str> = candidates.iter().map(|c| c.dial_code.as_str()).collect();
        assert_eq!(codes, vec!["+1876", "+1"]);
        assert_eq!(candidates[0].remaining_digits, "5551234");
    }

    #[test]
    fn test_depth_limits_prefixes() {
        let registry = create_test_registry();

        let candidates = detect(&registry, "18765551234", 3);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].dial_code, "+1");
    }

    #[test]
    fn test_short_input_limits_prefixes() {
        let registry = create_test_registry();

        let candidates = detect(&registry, "24", 4);
        assert!(candidates.is_empty());

        let candidates = detect(&registry, "248", 4);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].remaining_digits, "");
    }

    #[test]
    fn test_empty_and_unmatched_input() {
        let registry = create_test_registry();

        assert!(detect(&registry, "", 4).is_empty());
        assert!(detect(&registry, "no digits", 4).is_empty());
        assert!(detect(&registry, "999999", 4).is_empty());
    }

    #[test]
    fn test_formatting_characters_ignored() {
        let registry = create_test_registry();
        let candidates = detect(&registry, "+49 151 2345", 4);
        assert_eq!(candidates[0].dial_code, "+49");
        assert_eq!(candidates[0].remaining_digits, "1512345");
    }
}
