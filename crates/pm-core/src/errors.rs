//! Cross-cutting error types for Postmortem.
//!
//! Domain-specific errors (e.g., `CatalogError`, `ConfigError`) are defined in
//! their respective crates. Filtering and navigation are total and never fail.

use thiserror::Error;

/// Errors that can be raised by any Postmortem crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`] on a case study key.
    #[must_use]
    pub fn case_study_not_found(key: &str) -> Self {
        Self::NotFound {
            entity_type: "case_study".to_string(),
            id: key.to_string(),
        }
    }
}
