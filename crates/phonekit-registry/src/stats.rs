//! Descriptive statistics over a registry.

use crate::registry::CountryRegistry;
use phonekit_core::DialCode;
use serde::Serialize;

/// Dial codes whose record counts are always reported by [`RegistryStats`].
pub const REFERENCE_DIAL_CODES: [&str; 5] = ["+1", "+7", "+44", "+47", "+61"];

/// Aggregate counts for a registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistryStats {
    /// Number of records
    pub total_countries: usize,
    /// Number of distinct dial codes
    pub unique_dial_codes: usize,
    /// Shortest dial code by character length (first in registry order on ties)
    pub shortest_dial_code: Option<DialCode>,
    /// Longest dial code by character length (first in registry order on ties)
    pub longest_dial_code: Option<DialCode>,
    /// Mean dial code length in characters, `+` included
    pub average_dial_code_length: f64,
    /// Record counts for [`REFERENCE_DIAL_CODES`], in that order
    pub reference_counts: Vec<DialCodeCount>,
}

/// Number of records sharing one dial code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialCodeCount {
    /// The dial code
    pub dial_code: String,
    /// Records carrying it
    pub count: usize,
}

impl RegistryStats {
    pub(crate) fn compute(registry: &CountryRegistry) -> Self {
        let mut shortest: Option<&DialCode> = None;
        let mut longest: Option<&DialCode> = None;
        let mut total_length = 0usize;

        for record in registry {
            let code = &record.dial_code;
            let len = code.as_str().len();
            total_length += len;

            if shortest.map_or(true, |s| len < s.as_str().len()) {
                shortest = Some(code);
            }
            if longest.map_or(true, |l| len > l.as_str().len()) {
                longest = Some(code);
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let average_dial_code_length = if registry.is_empty() {
            0.0
        } else {
            total_length as f64 / registry.len() as f64
        };

        let reference_counts = REFERENCE_DIAL_CODES
            .iter()
            .map(|code| DialCodeCount {
                dial_code: (*code).to_string(),
                count: registry.all_by_dial_code(code).len(),
            })
            .collect();

        Self {
            total_countries: registry.len(),
            unique_dial_codes: registry.all_dial_codes().len(),
            shortest_dial_code: shortest.cloned(),
            longest_dial_code: longest.cloned(),
            average_dial_code_length,
            reference_counts,
        }
    }

    /// Count for one of the reference dial codes.
    #[must_use]
    pub fn reference_count(&self, dial_code: &str) -> Option<usize> {
        self.reference_counts
            .iter()
            .find(|entry| entry.dial_code == dial_code)
            .map(|entry| entry.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::CountryRecord;

    fn record(name: &str, iso2: &str, iso3: &str, dial_code: &str) -> CountryRecord {
        CountryRecord::new(name, iso2, iso3, dial_code).expect("valid record")
    }

    #[test]
    fn test_stats_small_registry() {
        let registry = CountryRegistry::from_records(vec![
            record("Canada", "CA", "CAN", "+1"),
            record("Jamaica", "JM", "JAM", "+1876"),
            record("Norway", "NO", "NOR", "+47"),
            record("Svalbard and Jan Mayen", "SJ", "SJM", "+47"),
            record("United States", "US", "USA", "+1"),
            record("Bermuda", "BM", "BMU", "+1441"),
        ])
        .expect("valid registry");

        let stats = registry.stats();
        assert_eq!(stats.total_countries, 6);
        assert_eq!(stats.unique_dial_codes, 4);
        assert_eq!(
            stats.shortest_dial_code.as_ref().map(DialCode::as_str),
            Some("+1")
        );
        // Jamaica precedes Bermuda in registry order
        assert_eq!(
            stats.longest_dial_code.as_ref().map(DialCode::as_str),
            Some("+1876")
        );
        // (2 + 5 + 3 + 3 + 2 + 5) / 6
        assert!((stats.average_dial_code_length - 20.0 / 6.0).abs() < f64::EPSILON);

        assert_eq!(stats.reference_count("+1"), Some(2));
        assert_eq!(stats.reference_count("+47"), Some(2));
        assert_eq!(stats.reference_count("+44"), Some(0));
        assert_eq!(stats.reference_count("+49"), None);
    }

    #[test]
    fn test_stats_empty_registry() {
        let registry = CountryRegistry::from_records(Vec::new()).expect("empty registry");
        let stats = registry.stats();

        assert_eq!(stats.total_countries, 0);
        assert_eq!(stats.unique_dial_codes, 0);
        assert!(stats.shortest_dial_code.is_none());
        assert!(stats.longest_dial_code.is_none());
        assert!(stats.average_dial_code_length.abs() < f64::EPSILON);
        assert_eq!(stats.reference_counts.len(), REFERENCE_DIAL_CODES.len());
    }

    #[test]
    fn test_stats_serialize() {
        let registry = CountryRegistry::from_records(vec![record("Canada", "CA", "CAN", "+1")])
            .expect("valid registry");
        let json = serde_json::to_value(registry.stats()).expect("serialize stats");
        assert_eq!(json["total_countries"], 1);
        assert_eq!(json["shortest_dial_code"], "+1");
    }
}
