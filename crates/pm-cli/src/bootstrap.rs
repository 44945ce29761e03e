use std::path::Path;

use anyhow::Context;
use pm_config::PmConfig;

/// Load layered config, then let `--dataset` override `catalog.path`.
pub fn load_config(dataset: Option<&Path>) -> anyhow::Result<PmConfig> {
    let mut config = PmConfig::load_with_dotenv().context("failed to load configuration")?;

    if let Some(path) = dataset {
        tracing::debug!(path = %path.display(), "dataset overridden on the command line");
        config.catalog.path = path.display().to_string();
    }

    Ok(config)
}
