//! Immutable country registry with lookup support.

use crate::{
    definition::{CountryRecord, RegistryDocument, RegistryMetadata},
    error::{RegistryError, Result},
    loader::{RegistryLoader, BUNDLED_ORIGIN},
    stats::RegistryStats,
};
use phonekit_core::{normalize_dial_code, DialCode};
use std::sync::Arc;
use tracing::{info, warn};

/// Ordered, read-only collection of country records.
///
/// Every singular lookup returns the first matching record in registry
/// order. Dial codes and ISO2 codes are not unique, so "first" is a
/// deterministic tie-break, not a canonical answer; use
/// [`CountryRegistry::all_by_dial_code`] or [`CountryRegistry::search`] to see
/// every match. Cloning is cheap and clones share the same records.
#[derive(Debug, Clone)]
pub struct CountryRegistry {
    metadata: Arc<RegistryMetadata>,
    records: Arc<[CountryRecord]>,
    max_dial_code_digits: usize,
}

/// Multi-field search criteria. Unset fields are ignored; set fields are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryQuery {
    /// Case-insensitive substring of the country name; blank matches nothing
    pub name: Option<String>,
    /// Dial code, with or without the leading `+`
    pub dial_code: Option<String>,
    /// Case-insensitive ISO2 code
    pub iso2: Option<String>,
    /// Case-insensitive ISO3 code
    pub iso3: Option<String>,
}

impl CountryQuery {
    /// Whether a record satisfies every criterion that is set.
    #[must_use]
    pub fn matches(&self, record: &CountryRecord) -> bool {
        self.name
            .as_deref()
            .map_or(true, |fragment| name_contains(record, fragment))
            && self
                .dial_code
                .as_deref()
                .map_or(true, |code| record.dial_code.as_str() == normalize_dial_code(code))
            && self
                .iso2
                .as_deref()
                .map_or(true, |code| record.iso2.eq_ignore_ascii_case(code.trim()))
            && self
                .iso3
                .as_deref()
                .map_or(true, |code| record.iso3.eq_ignore_ascii_case(code.trim()))
    }
}

/// Case-insensitive substring match. A blank fragment matches nothing.
fn name_contains(record: &CountryRecord, fragment: &str) -> bool {
    let fragment = fragment.trim();
    !fragment.is_empty() && record.name.to_lowercase().contains(&fragment.to_lowercase())
}

impl CountryRegistry {
    /// Build a registry from the database compiled into this crate.
    ///
    /// # Errors
    /// Returns error if the bundled document fails to parse or validate.
    pub fn bundled() -> Result<Self> {
        let document = RegistryLoader::load_bundled()?;
        Self::build(document, BUNDLED_ORIGIN)
    }

    /// Build a registry from a database file.
    ///
    /// # Errors
    /// Returns error if loading or validation fails.
    pub fn load_from(loader: &RegistryLoader) -> Result<Self> {
        let document = loader.load()?;
        Self::build(document, &loader.path().display().to_string())
    }

    /// Build a registry from a parsed database document.
    ///
    /// # Errors
    /// Returns error if the document has no records or any record is invalid.
    pub fn from_document(document: RegistryDocument) -> Result<Self> {
        Self::build(document, "<document>")
    }

    /// Build a registry from in-memory records, e.g. a synthetic test table.
    ///
    /// # Errors
    /// Returns error if any record is invalid.
    pub fn from_records(records: Vec<CountryRecord>) -> Result<Self> {
        let metadata = RegistryMetadata::synthetic(records.len());
        Self::assemble(metadata, records)
    }

    fn build(document: RegistryDocument, origin: &str) -> Result<Self> {
        let RegistryDocument {
            metadata,
            countries,
        } = document;

        if countries.is_empty() {
            return Err(RegistryError::Empty);
        }

        if metadata.total_countries != countries.len() {
            warn!(
                origin,
                declared = metadata.total_countries,
                actual = countries.len(),
                "country database metadata disagrees with record count"
            );
        }

        let registry = Self::assemble(metadata, countries)?;

        info!(
            origin,
            count = registry.len(),
            version = %registry.metadata.version,
            "loaded country registry"
        );

        Ok(registry)
    }

    fn assemble(metadata: RegistryMetadata, records: Vec<CountryRecord>) -> Result<Self> {
        for record in &records {
            record.validate()?;
        }

        let max_dial_code_digits = records
            .iter()
            .map(|record| record.dial_digits().len())
            .max()
            .unwrap_or(0);

        Ok(Self {
            metadata: Arc::new(metadata),
            records: records.into(),
            max_dial_code_digits,
        })
    }

    /// Database metadata.
    #[must_use]
    pub fn metadata(&self) -> &RegistryMetadata {
        &self.metadata
    }

    /// All records in registry order.
    #[must_use]
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    /// Iterate over records in registry order.
    pub fn iter(&self) -> std::slice::Iter<'_, CountryRecord> {
        self.records.iter()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the registry has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Length in digits of the longest dial code present.
    #[must_use]
    pub fn max_dial_code_digits(&self) -> usize {
        self.max_dial_code_digits
    }

    /// First record whose dial code equals `code` (a leading `+` is added if absent).
    #[must_use]
    pub fn by_dial_code(&self, code: &str) -> Option<&CountryRecord> {
        let code = normalize_dial_code(code);
        self.records
            .iter()
            .find(|record| record.dial_code.as_str() == code)
    }

    /// Every record sharing the dial code, in registry order.
    #[must_use]
    pub fn all_by_dial_code(&self, code: &str) -> Vec<&CountryRecord> {
        let code = normalize_dial_code(code);
        self.records
            .iter()
            .filter(|record| record.dial_code.as_str() == code)
            .collect()
    }

    /// First record whose ISO2 code matches, ignoring case.
    #[must_use]
    pub fn by_iso2(&self, code: &str) -> Option<&CountryRecord> {
        let code = code.trim();
        self.records
            .iter()
            .find(|record| record.iso2.eq_ignore_ascii_case(code))
    }

    /// First record whose ISO3 code matches, ignoring case.
    #[must_use]
    pub fn by_iso3(&self, code: &str) -> Option<&CountryRecord> {
        let code = code.trim();
        self.records
            .iter()
            .find(|record| record.iso3.eq_ignore_ascii_case(code))
    }

    /// First record whose name contains `fragment`, ignoring case.
    ///
    /// A blank fragment matches nothing.
    #[must_use]
    pub fn by_name(&self, fragment: &str) -> Option<&CountryRecord> {
        self.records
            .iter()
            .find(|record| name_contains(record, fragment))
    }

    /// Every record matching all criteria set in `query`, in registry order.
    #[must_use]
    pub fn search(&self, query: &CountryQuery) -> Vec<&CountryRecord> {
        self.records
            .iter()
            .filter(|record| query.matches(record))
            .collect()
    }

    /// Distinct dial codes sorted by numeric value (`+7` < `+20` < `+44`).
    #[must_use]
    pub fn all_dial_codes(&self) -> Vec<&DialCode> {
        let mut codes: Vec<&DialCode> = self.records.iter().map(|r| &r.dial_code).collect();
        codes.sort_by_key(|code| (code.numeric_value(), code.as_str().len()));
        codes.dedup();
        codes
    }

    /// Whether at least one record carries exactly this dial code.
    #[must_use]
    pub fn is_valid_dial_code(&self, code: &str) -> bool {
        self.by_dial_code(code).is_some()
    }

    /// Aggregate counts over the registry.
    #[must_use]
    pub fn stats(&self) -> RegistryStats {
        RegistryStats::compute(self)
    }
}

impl<'a> IntoIterator for &'a CountryRegistry {
    type Item = &'a CountryRecord;
    type IntoIter = std::slice::Iter<'a, CountryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
