//! Configuration file loading

use super::model::Config;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

impl Config {
    /// Parse a YAML configuration. Missing keys take their default values.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // An empty document is null in YAML
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("Failed to parse configuration")
    }
}

/// Load a configuration file from disk
pub async fn load_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = Config::from_yaml_str(&content)
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded configuration file");
    Ok(config)
}
