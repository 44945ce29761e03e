//! Catalog dataset and listing configuration.

use std::path::PathBuf;

use pm_core::entities::ALL_CATEGORIES;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Number of records shown on the home grid before any filter is applied.
const fn default_featured_limit() -> usize {
    12
}

fn default_categories() -> Vec<String> {
    [
        ALL_CATEGORIES,
        "Fintech",
        "HealthTech",
        "PropTech",
        "Media",
        "Hardware",
        "Social",
        "Retail",
        "Energy",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Path to a JSON dataset. Empty means the dataset embedded in `pm-catalog`.
    #[serde(default)]
    pub path: String,

    /// Featured cutoff for the unfiltered home listing.
    #[serde(default = "default_featured_limit")]
    pub featured_limit: usize,

    /// Filter bar entries, in display order. Must start with "All".
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: String::new(),
            featured_limit: default_featured_limit(),
            categories: default_categories(),
        }
    }
}

impl CatalogConfig {
    /// External dataset file, if one is configured.
    pub fn dataset_path(&self) -> Option<PathBuf> {
        let trimmed = self.path.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PathBuf::from(trimmed))
        }
    }

    /// Reject settings the listing view cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.featured_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "catalog.featured_limit".into(),
                reason: "must be at least 1".into(),
            });
        }

        if self.categories.first().map(String::as_str) != Some(ALL_CATEGORIES) {
            return Err(ConfigError::InvalidValue {
                field: "catalog.categories".into(),
                reason: format!("first entry must be \"{ALL_CATEGORIES}\""),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_home_grid() {
        let config = CatalogConfig::default();
        assert_eq!(config.featured_limit, 12);
        assert_eq!(config.categories.len(), 9);
        assert_eq!(config.categories[0], "All");
        assert!(config.dataset_path().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_path_means_embedded() {
        let config = CatalogConfig {
            path: "   ".into(),
            ..CatalogConfig::default()
        };
        assert!(config.dataset_path().is_none());
    }

    #[test]
    fn zero_featured_limit_is_rejected() {
        let config = CatalogConfig {
            featured_limit: 0,
            ..CatalogConfig::default()
        };
        let err = config.validate().expect_err("zero cutoff should fail");
        assert!(err.to_string().contains("catalog.featured_limit"));
    }

    #[test]
    fn categories_must_lead_with_all() {
        let config = CatalogConfig {
            categories: vec!["Fintech".into(), "All".into()],
            ..CatalogConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
