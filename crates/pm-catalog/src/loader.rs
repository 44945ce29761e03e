use std::path::Path;

use pm_config::CatalogConfig;
use pm_core::entities::CaseStudy;
use pm_schema::{DATASET_SCHEMA, SchemaRegistry};

use crate::error::CatalogError;
use crate::store::{Catalog, build_catalog};

/// Dataset shipped with the crate.
pub const EMBEDDED_DATASET: &str = include_str!("../data/case_studies.json");

impl Catalog {
    /// Load the dataset named by `config`, or the embedded one when no path is set.
    ///
    /// # Errors
    ///
    /// See [`Catalog::from_json_str`] and [`Catalog::from_path`].
    pub fn load(config: &CatalogConfig) -> Result<Self, CatalogError> {
        match config.dataset_path() {
            Some(path) => Self::from_path(&path),
            None => Self::embedded(),
        }
    }

    /// Build the catalog from the embedded dataset.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded dataset itself is invalid.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json_str(EMBEDDED_DATASET)
    }

    /// Read and build the catalog from a JSON dataset file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Catalog::from_json_str`].
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = json.len(), "loading dataset");
        Self::from_json_str(&json)
    }

    /// Validate, deserialize, and deduplicate a JSON dataset.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Json`] if the text is not JSON
    /// - [`CatalogError::Schema`] if it does not match `case_study_dataset`
    /// - [`CatalogError::Empty`] if the array has no records
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        SchemaRegistry::new().validate(DATASET_SCHEMA, &value)?;

        let raw: Vec<CaseStudy> = serde_json::from_value(value)?;
        if raw.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(build_catalog(raw))
    }
}
