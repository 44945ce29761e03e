use anyhow::Context;
use pm_catalog::Catalog;
use pm_config::PmConfig;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: PmConfig,
    pub catalog: Catalog,
}

impl AppContext {
    /// Load the catalog named by `config.catalog`.
    pub fn init(config: PmConfig) -> anyhow::Result<Self> {
        let catalog = Catalog::load(&config.catalog).with_context(|| {
            config.catalog.dataset_path().map_or_else(
                || "failed to load embedded dataset".to_string(),
                |path| format!("failed to load dataset at {}", path.display()),
            )
        })?;

        if !catalog.duplicates().is_empty() {
            tracing::info!(
                discarded = catalog.duplicates().len(),
                "dataset contains duplicate names; run `pm duplicates` for details"
            );
        }

        Ok(Self { config, catalog })
    }

    /// Featured cutoff for the default listing.
    #[must_use]
    pub const fn featured_limit(&self) -> usize {
        self.config.catalog.featured_limit
    }

    #[cfg(test)]
    pub fn embedded() -> Self {
        Self::init(PmConfig::default()).expect("embedded dataset should load")
    }
}
