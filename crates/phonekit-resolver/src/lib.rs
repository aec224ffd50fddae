//! Phonekit Resolver - Country detection and phone number formatting.
//!
//! Given an arbitrary digit string, the resolver works out which dial-code
//! prefixes it could start with, picks a target country, and renders the
//! number in US, international, national, or E.164 format.
//!
//! # Modules
//!
//! - [`detect`] - Longest-prefix-first dial code detection
//! - `render` - The four output renderers (internal)
//! - [`resolver`] - Country resolution plus the format/validate/analyze entry points
//! - [`options`] - Typed and untyped request types
//! - [`analysis`] - Combined report returned by [`Resolver::analyze`]
//! - [`digits`] - Digit extraction and character screening
//! - [`error`] - The formatting error taxonomy
//!
//! Formatting fails fast with a [`FormatError`]. Validation and analysis
//! never fail: they answer `false` or a report with `valid: false`.
//!
//! # Example
//!
//! ```rust
//! use phonekit_resolver::{CountrySource, FormatOptions, Resolver, ValidationOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = Resolver::bundled()?;
//!
//! assert_eq!(resolver.format("2128691246", &FormatOptions::Us)?, "+1 (212) 869-1246");
//!
//! let options = FormatOptions::International {
//!     country: CountrySource::AutoDetect,
//!     strict: false,
//! };
//! assert_eq!(resolver.format("447700900123", &options)?, "+44 7700900123");
//!
//! assert!(!resolver.is_valid("123", &ValidationOptions::new().with_strict(true)));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod analysis;
pub mod detect;
pub mod digits;
pub mod error;
pub mod options;
mod render;
pub mod resolver;

// Re-export commonly used types
pub use analysis::{AnalysisReport, CountrySummary, FormatSet, PossibleCountry, ReportError};
pub use detect::DetectionCandidate;
pub use digits::{extract_digits, has_only_phone_characters};
pub use error::{FormatError, Result};
pub use options::{CountrySource, FormatOptions, FormatRequest, ValidationOptions};
pub use resolver::{Resolver, MAX_DIGITS, MIN_DIGITS};
