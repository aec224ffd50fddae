//! Output renderers, one per [`phonekit_core::PhoneFormat`].
//!
//! Renderers take already-extracted ASCII digits and an already-resolved
//! country; digit extraction, country resolution, and detection happen in
//! [`crate::Resolver`], the only caller.

use crate::error::{FormatError, Result};
use phonekit_core::PhoneFormat;
use phonekit_registry::CountryRecord;

/// ISO2 codes that get the `(AAA) EEE-NNNN` national layout.
const NORTH_AMERICAN_ISO2: [&str; 2] = ["US", "CA"];

/// `(AAA) EEE-NNNN` from exactly ten digits.
fn north_american(digits: &str) -> String {
    format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
}

/// Render in US format.
///
/// Accepts 11 digits starting with `1`, 10 digits, or 7 digits.
pub(crate) fn us(digits: &str) -> Result<String> {
    match digits.len() {
        11 if digits.starts_with('1') => Ok(format!("+1 {}", north_american(&digits[1..]))),
        11 => Err(FormatError::InvalidCountryPrefix {
            digits: digits.to_string(),
        }),
        10 => Ok(format!("+1 {}", north_american(digits))),
        7 => Ok(format!("{}-{}", &digits[..3], &digits[3..])),
        len => Err(FormatError::InvalidLength { digits: len }),
    }
}

/// Render as `{dialCode} {nationalDigits}`.
///
/// The dial code digits are stripped from the front when present; otherwise
/// the full digits follow the dial code unchanged.
pub(crate) fn international(digits: &str, country: Option<&CountryRecord>, strict: bool) -> Result<String> {
    let country = country.ok_or(FormatError::MissingCountryContext {
        format: PhoneFormat::International,
    })?;
    let dial_code = country.dial_code.as_str();

    match digits.strip_prefix(country.dial_digits()) {
        Some("") if strict => Err(FormatError::EmptyNationalNumber {
            dial_code: dial_code.to_string(),
        }),
        Some(national) => Ok(format!("{dial_code} {national}")),
        None => Ok(format!("{dial_code} {digits}")),
    }
}

/// Render in national format.
///
/// Only US and Canada with exactly ten digits get a real layout; everything
/// else falls back to the bare digits.
#[must_use]
pub(crate) fn national(digits: &str, country: Option<&CountryRecord>) -> String {
    let north_american_country = country.is_some_and(|country| {
        NORTH_AMERICAN_ISO2
            .iter()
            .any(|iso2| country.iso2.eq_ignore_ascii_case(iso2))
    });

    if north_american_country && digits.len() == 10 {
        north_american(digits)
    } else {
        digits.to_string()
    }
}

/// Render in E.164: `+` followed by the digits, with the dial code prepended
/// only when the digits don't already start with it.
pub(crate) fn e164(digits: &str, country: Option<&CountryRecord>) -> Result<String> {
    let country = country.ok_or(FormatError::MissingCountryContext {
        format: PhoneFormat::E164,
    })?;
    let dial_digits = country.dial_digits();

    if digits.starts_with(dial_digits) {
        Ok(format!("+{digits}"))
    } else {
        Ok(format!("+{dial_digits}{digits}"))
    }
}
