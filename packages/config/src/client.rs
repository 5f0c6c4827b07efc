use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::constants::{
    SITEPANEL_API_URL, SITEPANEL_DATA_DIR, SITEPANEL_HTTP_CONNECT_TIMEOUT_SECS,
    SITEPANEL_HTTP_TIMEOUT_SECS,
};

pub const DEFAULT_API_URL: &str = "http://localhost:3001/api/admin";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const MAX_TIMEOUT_SECS: u64 = 300;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid API URL '{0}': {1}")]
    InvalidApiUrl(String, String),
    #[error("Invalid timeout for {0}: {1}")]
    InvalidTimeout(&'static str, #[source] ParseIntError),
    #[error("Timeout for {0} is out of valid range (1-300 seconds): {1}")]
    TimeoutOutOfRange(&'static str, u64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the settings API, without a trailing slash
    pub api_url: String,
    pub data_dir: PathBuf,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = env::var(SITEPANEL_API_URL).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_url = normalize_api_url(&api_url)?;

        let data_dir = env::var(SITEPANEL_DATA_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| sitepanel_core::sitepanel_dir());

        let request_timeout = timeout_from_env(SITEPANEL_HTTP_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS)?;
        let connect_timeout =
            timeout_from_env(SITEPANEL_HTTP_CONNECT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS)?;

        tracing::debug!(api_url = %api_url, data_dir = %data_dir.display(), "loaded client config");

        Ok(ClientConfig {
            api_url,
            data_dir,
            request_timeout,
            connect_timeout,
        })
    }

    /// Config pointing at `api_url` with default timeouts, used by tests and overrides
    pub fn with_api_url(api_url: &str) -> Result<Self, ConfigError> {
        Ok(ClientConfig {
            api_url: normalize_api_url(api_url)?,
            data_dir: sitepanel_core::sitepanel_dir(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        })
    }

    /// Replace the API URL, keeping every other setting
    pub fn override_api_url(mut self, api_url: &str) -> Result<Self, ConfigError> {
        self.api_url = normalize_api_url(api_url)?;
        Ok(self)
    }

    /// Path of the SQLite file holding the local cache
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("sitepanel.db")
    }
}

fn normalize_api_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed)
        .map_err(|e| ConfigError::InvalidApiUrl(trimmed.to_string(), e.to_string()))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ConfigError::InvalidApiUrl(
            trimmed.to_string(),
            "scheme must be http or https".to_string(),
        ));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

fn timeout_from_env(var: &'static str, default: u64) -> Result<Duration, ConfigError> {
    let secs = match env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidTimeout(var, e))?,
        Err(_) => default,
    };

    if secs == 0 || secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::TimeoutOutOfRange(var, secs));
    }

    Ok(Duration::from_secs(secs))
}
