//! Country database loading from JSON files.
//!
//! The bundled database is compiled into the crate; external databases with
//! the same layout can be loaded from disk.

use crate::{
    definition::RegistryDocument,
    error::{RegistryError, Result},
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Bundled country database.
pub(crate) const BUNDLED_DATABASE: &str = include_str!("../data/countries.json");

/// Origin label used in errors and logs for the bundled database.
pub(crate) const BUNDLED_ORIGIN: &str = "<bundled>";

/// Loader for country databases stored as JSON files.
#[derive(Debug, Clone)]
pub struct RegistryLoader {
    /// Database file path
    path: PathBuf,
}

impl RegistryLoader {
    /// Create a new loader for the given database file.
    ///
    /// # Errors
    /// Returns error if the file doesn't exist or is not a regular file.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.is_file() {
            return Err(RegistryError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        Ok(Self { path })
    }

    /// Path of the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the database document.
    ///
    /// Records are not validated here; [`crate::CountryRegistry::from_document`]
    /// does that.
    ///
    /// # Errors
    /// Returns error if the file can't be read or is not a valid database document.
    pub fn load(&self) -> Result<RegistryDocument> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| RegistryError::LoadError {
            path: self.path.display().to_string(),
            source: e,
        })?;

        let document = Self::parse(&contents, &self.path.display().to_string())?;

        debug!(
            path = %self.path.display(),
            records = document.countries.len(),
            version = %document.metadata.version,
            "read country database"
        );

        Ok(document)
    }

    /// Parse the bundled database document.
    pub fn load_bundled() -> Result<RegistryDocument> {
        Self::parse(BUNDLED_DATABASE, BUNDLED_ORIGIN)
    }

    /// Parse a database document from a JSON string.
    pub fn parse(contents: &str, origin: &str) -> Result<RegistryDocument> {
        serde_json::from_str(contents).map_err(|e| RegistryError::ParseError {
            path: origin.to_string(),
            source: e,
        })
    }
}
