//! Configuration loading.

use std::fs;
use std::path::Path;

use log::debug;

use crate::domain::{AppError, SyncConfig};

/// Load configuration from `path`, falling back to defaults when the file is absent.
pub fn load_config(path: &Path) -> Result<SyncConfig, AppError> {
    if !path.exists() {
        debug!("No config at {}, using defaults", path.display());
        return Ok(SyncConfig::default());
    }

    let content = fs::read_to_string(path)?;
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<SyncConfig, AppError> {
    let config: SyncConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
