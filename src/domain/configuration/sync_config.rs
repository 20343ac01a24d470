//! Configuration models for the template service connection.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Top-level configuration, usually loaded from `tplsync.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyncConfig {
    /// Remote template service configuration.
    #[serde(default)]
    pub gateway: GatewayConfig,
}

impl SyncConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.gateway.validate()
    }
}

/// Remote template service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Base URL of the template API. Endpoint paths are joined onto it.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Request timeout in seconds. Unset means requests wait indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), timeout_secs: None, api_key_env: default_api_key_env() }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if !matches!(self.api_url.scheme(), "http" | "https") {
            return Err(AppError::config_error(format!(
                "api_url must use http or https, got '{}'",
                self.api_url.scheme()
            )));
        }
        if self.timeout_secs == Some(0) {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        if self.api_key_env.trim().is_empty() {
            return Err(AppError::config_error("api_key_env must not be empty"));
        }
        Ok(())
    }

    /// Base URL with a trailing slash so relative joins keep the last path segment.
    pub fn base_url(&self) -> Url {
        let mut url = self.api_url.clone();
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.templates.example.com/v1/").expect("Default API URL must be valid")
}

fn default_api_key_env() -> String {
    "TPLSYNC_API_KEY".to_string()
}
