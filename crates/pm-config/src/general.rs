//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_format() -> String {
    String::from("table")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Output format used when `--format` is not given ("json", "table", "raw").
    #[serde(default = "default_format")]
    pub default_format: String,

    /// Default result limit for filtered listings. 0 means no limit.
    #[serde(default)]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            default_limit: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_format, "table");
        assert_eq!(config.default_limit, 0);
    }
}
