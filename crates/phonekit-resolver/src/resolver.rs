//! Country resolution and the formatting/validation entry points.

use crate::{
    analysis::AnalysisReport,
    detect::{detect, DetectionCandidate},
    digits::{extract_digits, has_only_phone_characters},
    error::{FormatError, Result},
    options::{CountrySource, FormatOptions, FormatRequest, ValidationOptions},
    render,
};
use phonekit_core::PhoneFormat;
use phonekit_registry::{CountryRecord, CountryRegistry, RegistryError};
use tracing::{debug, trace};

/// Shortest digit string accepted by validation without a country hint.
pub const MIN_DIGITS: usize = 7;

/// Longest digit string accepted by lenient validation without a country hint.
pub const MAX_DIGITS: usize = 15;

/// Resolves countries for digit strings and renders them.
///
/// Holds an injected, immutable [`CountryRegistry`]; every method is a pure
/// function of its arguments and that registry.
#[derive(Debug, Clone)]
pub struct Resolver {
    registry: CountryRegistry,
    detection_depth: usize,
}

impl Resolver {
    /// Create a resolver over the given registry.
    ///
    /// Detection tries prefixes up to the longest dial code in the registry.
    #[must_use]
    pub fn new(registry: CountryRegistry) -> Self {
        let detection_depth = registry.max_dial_code_digits();
        Self {
            registry,
            detection_depth,
        }
    }

    /// Create a resolver over the bundled country database.
    pub fn bundled() -> std::result::Result<Self, RegistryError> {
        Ok(Self::new(CountryRegistry::bundled()?))
    }

    /// The underlying registry.
    #[must_use]
    pub fn registry(&self) -> &CountryRegistry {
        &self.registry
    }

    /// Longest prefix, in digits, that detection tries.
    #[must_use]
    pub fn detection_depth(&self) -> usize {
        self.detection_depth
    }

    /// Dial-code prefixes of `digits` that exist in the registry, longest first.
    #[must_use]
    pub fn detect(&self, digits: &str) -> Vec<DetectionCandidate<'_>> {
        detect(&self.registry, digits, self.detection_depth)
    }

    /// First country of the longest detected prefix.
    ///
    /// Ties are broken by registry order.
    #[must_use]
    pub fn detect_country(&self, digits: &str) -> Option<&CountryRecord> {
        self.detect(digits)
            .first()
            .and_then(DetectionCandidate::primary_country)
    }

    /// Resolve a country hint: ISO2 first, then ISO3, then dial code.
    #[must_use]
    pub fn resolve_hint(&self, hint: &str) -> Option<&CountryRecord> {
        let country = self
            .registry
            .by_iso2(hint)
            .or_else(|| self.registry.by_iso3(hint))
            .or_else(|| self.registry.by_dial_code(hint));

        trace!(
            hint,
            resolved = country.map(|c| c.iso2.as_str()),
            "resolved country hint"
        );

        country
    }

    /// Format a phone number with typed options.
    ///
    /// # Errors
    /// Fails on the first violated precondition; see [`FormatError`].
    pub fn format(&self, input: &str, options: &FormatOptions) -> Result<String> {
        self.run(input, options.format(), options.country(), options.strict())
    }

    /// Format a phone number from an untyped request.
    ///
    /// A country hint is resolved even when the format does not use it, so an
    /// unknown hint always fails with `UnknownCountry`.
    ///
    /// # Errors
    /// Fails on the first violated precondition; see [`FormatError`].
    pub fn format_request(&self, input: &str, request: &FormatRequest) -> Result<String> {
        let format = request.format()?;
        let source = request.country_source();
        self.run(input, format, source.as_ref(), request.strict)
    }

    fn run(
        &self,
        input: &str,
        format: PhoneFormat,
        source: Option<&CountrySource>,
        strict: bool,
    ) -> Result<String> {
        if input.is_empty() {
            return Err(FormatError::MissingInput);
        }

        let digits = extract_digits(input);
        if digits.is_empty() {
            return Err(FormatError::NoDigitsFound);
        }

        let country = match source {
            Some(CountrySource::Hint(hint)) => {
                Some(
                    self.resolve_hint(hint)
                        .ok_or_else(|| FormatError::UnknownCountry { hint: hint.clone() })?,
                )
            }
            Some(CountrySource::AutoDetect) => self.detect_country(&digits),
            None => None,
        };

        debug!(
            %format,
            digits = digits.len(),
            country = country.map(|c| c.iso2.as_str()),
            "formatting phone number"
        );

        self.render(format, &digits, country, strict)
    }

    fn render(
        &self,
        format: PhoneFormat,
        digits: &str,
        country: Option<&CountryRecord>,
        strict: bool,
    ) -> Result<String> {
        match format {
            PhoneFormat::Us => render::us(digits),
            PhoneFormat::International => render::international(digits, country, strict),
            PhoneFormat::E164 => render::e164(digits, country),
            PhoneFormat::National => Ok(match country {
                Some(country) => render::national(digits, Some(country)),
                None => match self.detect(digits).first() {
                    Some(candidate) => render::national(
                        &candidate.remaining_digits,
                        candidate.primary_country(),
                    ),
                    None => render::national(digits, None),
                },
            }),
        }
    }

    /// Whether `input` plausibly is a phone number. Never fails.
    ///
    /// - Characters other than digits, whitespace, `()`, `-`, `+`, `.` are rejected.
    /// - At least one digit is required.
    /// - With a country hint, the hint must resolve; strict mode also requires
    ///   the digits to start with the country's dial code.
    /// - Without a hint, strict mode needs at least [`MIN_DIGITS`] digits and a
    ///   detectable dial code; lenient mode needs [`MIN_DIGITS`]..=[`MAX_DIGITS`] digits.
    #[must_use]
    pub fn is_valid(&self, input: &str, options: &ValidationOptions) -> bool {
        if !has_only_phone_characters(input) {
            return false;
        }

        let digits = extract_digits(input);
        if digits.is_empty() {
            return false;
        }

        match (&options.country_code, options.strict) {
            (Some(hint), strict) => self
                .resolve_hint(hint)
                .is_some_and(|country| !strict || digits.starts_with(country.dial_digits())),
            (None, true) => digits.len() >= MIN_DIGITS && !self.detect(&digits).is_empty(),
            (None, false) => (MIN_DIGITS..=MAX_DIGITS).contains(&digits.len()),
        }
    }

    /// Detection plus every format in one report. Never fails.
    #[must_use]
    pub fn analyze(&self, input: &str) -> AnalysisReport {
        AnalysisReport::build(self, input)
    }

    pub(crate) fn render_with(
        &self,
        format: PhoneFormat,
        digits: &str,
        country: Option<&CountryRecord>,
    ) -> Result<String> {
        self.render(format, digits, country, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, iso2: &str, iso3: &str, dial_code: &str) -> CountryRecord {
        CountryRecord::new(name, iso2, iso3, dial_code).expect("valid record")
    }

    fn create_test_resolver() -> Resolver {
        let registry = CountryRegistry::from_records(vec![
            record("Canada", "CA", "CAN", "+1"),
            record("Germany", "DE", "DEU", "+49"),
            record("Guernsey", "GG", "GGY", "+44"),
            record("Jamaica", "JM", "JAM", "+1876"),
            record("United Kingdom", "GB", "GBR", "+44"),
            record("United States", "US", "USA", "+1"),
            record("Testland", "XT", "XTL", "+999"),
        ])
        .expect("valid registry");
        Resolver::new(registry)
    }

    #[test]
    fn test_detection_depth_follows_registry() {
        let resolver = create_test_resolver();
        assert_eq!(resolver.detection_depth(), 4);

        let short = Resolver::new(
            CountryRegistry::from_records(vec![record("Germany", "DE", "DEU", "+49")])
                .expect("valid registry"),
        );
        assert_eq!(short.detection_depth(), 2);
    }

    #[test]
    fn test_resolve_hint_order() {
        let resolver = create_test_resolver();

        assert_eq!(resolver.resolve_hint("de").expect("iso2").name, "Germany");
        assert_eq!(resolver.resolve_hint("GBR").expect("iso3").name, "United Kingdom");
        // Dial code lookup takes the first record in registry order
        assert_eq!(resolver.resolve_hint("+44").expect("dial").name, "Guernsey");
        assert_eq!(resolver.resolve_hint("1").expect("dial").name, "Canada");
        assert!(resolver.resolve_hint("ZZ").is_none());
    }

    #[test]
    fn test_detect_country_tie_break_by_registry_order() {
        let resolver = create_test_resolver();

        assert_eq!(
            resolver.detect_country("447700900123").expect("+44").name,
            "Guernsey"
        );
        assert_eq!(
            resolver.detect_country("18765550100").expect("+1876").name,
            "Jamaica"
        );
        assert!(resolver.detect_country("999").is_some());
        assert!(resolver.detect_country("555").is_none());
    }

    #[test]
    fn test_format_input_errors() {
        let resolver = create_test_resolver();

        assert_eq!(
            resolver.format("", &FormatOptions::Us),
            Err(FormatError::MissingInput)
        );
        assert_eq!(
            resolver.format("call me", &FormatOptions::Us),
            Err(FormatError::NoDigitsFound)
        );
    }

    #[test]
    fn test_format_unknown_hint() {
        let resolver = create_test_resolver();
        let options = FormatOptions::E164 {
            country: CountrySource::hint("Atlantis"),
        };

        assert_eq!(
            resolver.format("12345", &options),
            Err(FormatError::UnknownCountry {
                hint: "Atlantis".to_string()
            })
        );
    }

    #[test]
    fn test_format_request_resolves_hint_for_us() {
        let resolver = create_test_resolver();
        let request = FormatRequest::new().with_country("ZZ");

        assert_eq!(
            resolver.format_request("2128691246", &request),
            Err(FormatError::UnknownCountry {
                hint: "ZZ".to_string()
            })
        );

        let request = FormatRequest::new().with_country("US");
        assert_eq!(
            resolver
                .format_request("2128691246", &request)
                .expect("us format"),
            "+1 (212) 869-1246"
        );
    }

    #[test]
    fn test_format_auto_detect_without_match() {
        let resolver = create_test_resolver();
        let options = FormatOptions::International {
            country: CountrySource::AutoDetect,
            strict: false,
        };

        assert_eq!(
            resolver.format("5551234567", &options),
            Err(FormatError::MissingCountryContext {
                format: PhoneFormat::International
            })
        );
    }

    #[test]
    fn test_format_strict_international_empty_national() {
        let resolver = create_test_resolver();
        let options = FormatOptions::International {
            country: CountrySource::hint("DE"),
            strict: true,
        };

        assert_eq!(
            resolver.format("+49", &options),
            Err(FormatError::EmptyNationalNumber {
                dial_code: "+49".to_string()
            })
        );
    }

    #[test]
    fn test_format_national_detects_when_country_absent() {
        let resolver = create_test_resolver();
        let options = FormatOptions::National { country: None };

        // "+1" detected (Canada first), remaining ten digits get the NANP layout
        assert_eq!(
            resolver.format("1 212 869 1246", &options).expect("national"),
            "(212) 869-1246"
        );
        // Jamaica is not US/Canada: bare remaining digits
        assert_eq!(
            resolver.format("18765550100", &options).expect("national"),
            "5550100"
        );
        // Nothing detected: bare digits
        assert_eq!(
            resolver.format("555-0100", &options).expect("national"),
            "5550100"
        );
    }

    #[test]
    fn test_format_national_with_hint_keeps_full_digits() {
        let resolver = create_test_resolver();
        let options = FormatOptions::National {
            country: Some(CountrySource::hint("US")),
        };

        assert_eq!(
            resolver.format("2128691246", &options).expect("national"),
            "(212) 869-1246"
        );
        assert_eq!(
            resolver.format("12128691246", &options).expect("national"),
            "12128691246"
        );
    }

    #[test]
    fn test_format_national_auto_detect_keeps_full_digits() {
        let resolver = create_test_resolver();
        let detected = FormatOptions::National {
            country: Some(CountrySource::AutoDetect),
        };
        let absent = FormatOptions::National { country: None };

        // The detected country is passed to the renderer with the digits as
        // given; only an absent country strips the matched prefix
        assert_eq!(
            resolver.format("12128691246", &detected).expect("national"),
            "12128691246"
        );
        assert_eq!(
            resolver.format("2128691246", &detected).expect("national"),
            "2128691246"
        );
        assert_eq!(
            resolver.format("12128691246", &absent).expect("national"),
            "(212) 869-1246"
        );
    }

    #[test]
    fn test_format_non_ascii_digits_are_not_digits() {
        let resolver = create_test_resolver();

        assert_eq!(
            resolver.format("ééééé", &FormatOptions::Us),
            Err(FormatError::NoDigitsFound)
        );
        // Arabic-Indic digits are ten bytes wide but carry no ASCII digits
        assert_eq!(
            resolver.format("\u{662}\u{661}\u{662}\u{668}\u{666}", &FormatOptions::Us),
            Err(FormatError::NoDigitsFound)
        );
    }

    #[test]
    fn test_is_valid_character_screen() {
        let resolver = create_test_resolver();
        let lenient = ValidationOptions::new();

        assert!(resolver.is_valid("(212) 869-1246", &lenient));
        assert!(!resolver.is_valid("212-869-1246 x5", &lenient));
        assert!(!resolver.is_valid("", &lenient));
        assert!(!resolver.is_valid("+ ( ) -", &lenient));
    }

    #[test]
    fn test_is_valid_lenient_length_bounds() {
        let resolver = create_test_resolver();
        let lenient = ValidationOptions::new();

        assert!(!resolver.is_valid("123456", &lenient));
        assert!(resolver.is_valid("1234567", &lenient));
        assert!(resolver.is_valid("123456789012345", &lenient));
        assert!(!resolver.is_valid("1234567890123456", &lenient));
    }

    #[test]
    fn test_is_valid_strict_without_hint() {
        let resolver = create_test_resolver();
        let strict = ValidationOptions::new().with_strict(true);

        assert!(!resolver.is_valid("123", &strict));
        assert!(resolver.is_valid("4915123456789", &strict));
        // Long enough but no dial code matches
        assert!(!resolver.is_valid("5551234567", &strict));
        // Strict mode has no upper bound
        assert!(resolver.is_valid("49151234567890123", &strict));
    }

    #[test]
    fn test_is_valid_with_hint() {
        let resolver = create_test_resolver();

        let lenient_de = ValidationOptions::new().with_country("DE");
        assert!(resolver.is_valid("15123456789", &lenient_de));
        // Lenient hint only needs to resolve
        assert!(resolver.is_valid("1", &lenient_de));

        let strict_de = lenient_de.clone().with_strict(true);
        assert!(resolver.is_valid("+49 151 23456789", &strict_de));
        assert!(!resolver.is_valid("15123456789", &strict_de));

        let unknown = ValidationOptions::new().with_country("ZZZZ");
        assert!(!resolver.is_valid("15123456789", &unknown));
    }
}
