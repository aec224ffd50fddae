//! Phonekit Registry - Immutable international dial-code registry.
//!
//! This crate owns the country database: it loads the JSON document (either
//! the bundled copy or an external file), validates every record, and
//! answers exact-key and prefix lookups over the records in registry order.
//!
//! # Architecture
//!
//! - **Definition Types** ([`definition`]): Country records and database metadata
//! - **Loader** ([`loader`]): JSON file loading for external databases
//! - **Registry** ([`registry`]): Immutable, ordered collection with lookup support
//! - **Stats** ([`stats`]): Descriptive aggregate counts
//! - **Errors** ([`error`]): Registry loading errors
//!
//! Lookups never fail: absence is `None` or an empty `Vec`. Only loading a
//! database can return an error.
//!
//! # Example
//!
//! ```rust
//! use phonekit_registry::CountryRegistry;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = CountryRegistry::bundled()?;
//!
//! let germany = registry.by_iso2("de").expect("Germany is bundled");
//! assert_eq!(germany.dial_code.as_str(), "+49");
//!
//! // "+1" is shared by several countries
//! assert!(registry.all_by_dial_code("1").len() > 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod definition;
pub mod error;
pub mod loader;
pub mod registry;
pub mod stats;

// Re-export commonly used types
pub use definition::{CountryRecord, RegistryDocument, RegistryMetadata};
pub use error::{RegistryError, Result};
pub use loader::RegistryLoader;
pub use registry::{CountryQuery, CountryRegistry};
pub use stats::{DialCodeCount, RegistryStats, REFERENCE_DIAL_CODES};
