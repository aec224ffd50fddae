//! Request types for formatting and validation.
//!
//! [`FormatOptions`] is the typed form: the international and E.164 variants
//! cannot be built without a [`CountrySource`]. [`FormatRequest`] is the
//! loose form used by string-driven callers such as the CLI and config; it
//! is checked when converted or executed.

use crate::error::{FormatError, Result};
use phonekit_core::PhoneFormat;

/// Where the target country comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountrySource {
    /// An ISO2 code, ISO3 code, or dial code, tried in that order
    Hint(String),
    /// Infer the country from the leading digits
    AutoDetect,
}

impl CountrySource {
    /// Shorthand for [`CountrySource::Hint`].
    pub fn hint(hint: impl Into<String>) -> Self {
        Self::Hint(hint.into())
    }
}

/// Typed formatting options, one variant per output format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormatOptions {
    /// `+1 (AAA) EEE-NNNN` or `EEE-NNNN`; needs no country
    #[default]
    Us,
    /// `{dialCode} {nationalDigits}`
    International {
        /// Target country
        country: CountrySource,
        /// Fail when no national digits remain after the dial code
        strict: bool,
    },
    /// `(AAA) EEE-NNNN` for US/Canada, bare digits otherwise
    National {
        /// Target country; detected from the digits when absent
        country: Option<CountrySource>,
    },
    /// `+{countryCode}{number}`
    E164 {
        /// Target country
        country: CountrySource,
    },
}

impl FormatOptions {
    /// The output format these options select.
    #[must_use]
    pub fn format(&self) -> PhoneFormat {
        match self {
            Self::Us => PhoneFormat::Us,
            Self::International { .. } => PhoneFormat::International,
            Self::National { .. } => PhoneFormat::National,
            Self::E164 { .. } => PhoneFormat::E164,
        }
    }

    /// The country source, if the format uses one.
    #[must_use]
    pub fn country(&self) -> Option<&CountrySource> {
        match self {
            Self::Us | Self::National { country: None } => None,
            Self::International { country, .. }
            | Self::National {
                country: Some(country),
            }
            | Self::E164 { country } => Some(country),
        }
    }

    /// Whether strict rendering is requested.
    #[must_use]
    pub fn strict(&self) -> bool {
        matches!(self, Self::International { strict: true, .. })
    }
}

/// Untyped formatting request.
///
/// When both a country code and auto-detection are given, the country code wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatRequest {
    /// Format name (`us`, `international`, `national`, `e164`); `us` when unset
    pub format: Option<String>,
    /// ISO2, ISO3, or dial code hint
    pub country_code: Option<String>,
    /// Detect the country from the leading digits
    pub auto_detect: bool,
    /// Strict rendering
    pub strict: bool,
}

impl FormatRequest {
    /// Create a request with defaults (US format, no country).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the format name.
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set the country hint.
    #[must_use]
    pub fn with_country(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = Some(country_code.into());
        self
    }

    /// Enable auto-detection.
    #[must_use]
    pub fn with_auto_detect(mut self, auto_detect: bool) -> Self {
        self.auto_detect = auto_detect;
        self
    }

    /// Enable strict mode.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Parse the format name.
    pub fn format(&self) -> Result<PhoneFormat> {
        match &self.format {
            Some(name) => Ok(name.parse()?),
            None => Ok(PhoneFormat::default()),
        }
    }

    /// The country source implied by the hint and auto-detect flag.
    #[must_use]
    pub fn country_source(&self) -> Option<CountrySource> {
        match &self.country_code {
            Some(hint) => Some(CountrySource::Hint(hint.clone())),
            None if self.auto_detect => Some(CountrySource::AutoDetect),
            None => None,
        }
    }

    /// Convert into typed options.
    ///
    /// # Errors
    /// `UnsupportedFormat` for an unknown format name, `MissingCountryContext`
    /// when international or E.164 is requested without a country source.
    pub fn to_options(&self) -> Result<FormatOptions> {
        let format = self.format()?;
        let country = self.country_source();

        match format {
            PhoneFormat::Us => Ok(FormatOptions::Us),
            PhoneFormat::National => Ok(FormatOptions::National { country }),
            PhoneFormat::International => Ok(FormatOptions::International {
                country: country.ok_or(FormatError::MissingCountryContext { format })?,
                strict: self.strict,
            }),
            PhoneFormat::E164 => Ok(FormatOptions::E164 {
                country: country.ok_or(FormatError::MissingCountryContext { format })?,
            }),
        }
    }
}

/// Options for [`crate::Resolver::is_valid`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// ISO2, ISO3, or dial code hint
    pub country_code: Option<String>,
    /// Strict validation
    pub strict: bool,
}

impl ValidationOptions {
    /// Lenient validation without a country.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the country hint.
    #[must_use]
    pub fn with_country(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = Some(country_code.into());
        self
    }

    /// Enable strict mode.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
