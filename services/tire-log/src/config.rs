//! Configuration types for the tire log service

use serde::{Deserialize, Serialize};
use std::path::Path;
use tire_form::FormDefaults;

/// Environment variable that overrides `api.base_url`
pub const API_URL_ENV: &str = "TIRE_LOG_API_URL";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: AuthConfig,
    /// Starting values for measurement checks
    #[serde(default)]
    pub measurement: FormDefaults,
}

/// Where the authentication endpoints live
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Scheme and host, e.g. `https://fleet.example.com`. Empty means
    /// same-origin relative paths.
    #[serde(default)]
    pub base_url: String,
}

impl AuthConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Config {
    /// Read the API URL override from the environment, once, at start-up
    pub fn apply_env(&mut self) {
        self.apply_api_url_override(std::env::var(API_URL_ENV).ok());
    }

    pub fn apply_api_url_override(&mut self, base_url: Option<String>) {
        if let Some(base_url) = base_url {
            tracing::debug!("Using API base URL {:?} from environment", base_url);
            self.api.base_url = base_url;
        }
    }

    pub fn validate(&self) -> crate::Result<()> {
        let base_url = &self.api.base_url;
        if !base_url.is_empty()
            && !base_url.starts_with("http://")
            && !base_url.starts_with("https://")
        {
            return Err(crate::TireLogError::Config(format!(
                "api.base_url must start with http:// or https://, got {:?}",
                base_url
            )));
        }
        Ok(())
    }

    /// The base URL for a native client, which has no origin to resolve
    /// relative paths against
    pub fn require_base_url(&self) -> crate::Result<&str> {
        if self.api.base_url.is_empty() {
            return Err(crate::TireLogError::Config(format!(
                "api.base_url is required; pass --base-url, set {} or add it to the config file",
                API_URL_ENV
            )));
        }
        Ok(&self.api.base_url)
    }
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::TireLogError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
