//! Catalog loading error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The dataset file could not be read.
    #[error("failed to read dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not valid JSON or does not match the entity shape.
    #[error("dataset json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The dataset failed schema validation.
    #[error("dataset schema error: {0}")]
    Schema(#[from] pm_schema::SchemaError),

    /// The dataset contains no records.
    #[error("dataset contains no case studies")]
    Empty,
}
