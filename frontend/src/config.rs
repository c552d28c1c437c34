use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::api::SessionMode;

pub const API_BASE_URL_ENV: &str = "API_BASE_URL";
pub const SESSION_MODE_ENV: &str = "SESSION_MODE";
pub const REQUEST_TIMEOUT_ENV: &str = "REQUEST_TIMEOUT_SECS";
pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("API base URL is not configured (set API_BASE_URL)")]
    MissingBaseUrl,
    #[error("API base URL `{0}` is not an absolute http(s) URL")]
    InvalidBaseUrl(String),
    #[error("unknown session mode `{0}` (expected `cookie` or `token`)")]
    InvalidSessionMode(String),
    #[error("invalid request timeout `{0}`")]
    InvalidTimeout(String),
    #[error("failed to parse runtime config: {0}")]
    Malformed(String),
}

/// Unvalidated configuration as it arrives from deployment sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub session_mode: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

impl RuntimeConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    /// Fills unset fields from `fallback`.
    pub fn or(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(fallback.api_base_url),
            session_mode: self.session_mode.or(fallback.session_mode),
            request_timeout_secs: self.request_timeout_secs.or(fallback.request_timeout_secs),
        }
    }

    /// Reads a JSON config file. A missing file is an empty config.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(raw) => Self::from_json(&raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::Malformed(e.to_string())),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_globals(browser::env_global, browser::config_global)
    }

    /// Merges the two deploy-time globals. `env` is keyed like the process
    /// environment (`API_BASE_URL`), `config` like `config.json` (`api_base_url`),
    /// and `env` wins where both are set.
    pub fn from_globals(
        env: impl Fn(&str) -> Option<String>,
        config: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let primary = Self::from_lookup(env)?;
        let fallback = Self::from_lookup(|key| config(&key.to_ascii_lowercase()))?;
        Ok(primary.or(fallback))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let request_timeout_secs = match lookup(REQUEST_TIMEOUT_ENV) {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?,
            ),
            None => None,
        };
        Ok(RuntimeConfig {
            api_base_url: lookup(API_BASE_URL_ENV),
            session_mode: lookup(SESSION_MODE_ENV),
            request_timeout_secs,
        })
    }
}

/// Validated configuration the client is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub session_mode: SessionMode,
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(ClientConfig {
            api_base_url: normalize_base_url(&api_base_url.into())?,
            session_mode: SessionMode::default(),
            request_timeout: None,
        })
    }

    pub fn with_session_mode(mut self, mode: SessionMode) -> Self {
        self.session_mode = mode;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

impl TryFrom<RuntimeConfig> for ClientConfig {
    type Error = ConfigError;

    fn try_from(raw: RuntimeConfig) -> Result<Self, Self::Error> {
        let base = raw.api_base_url.ok_or(ConfigError::MissingBaseUrl)?;
        let session_mode = match raw.session_mode.as_deref().map(str::trim) {
            None | Some("") => SessionMode::default(),
            Some(mode) => mode
                .parse()
                .map_err(|_| ConfigError::InvalidSessionMode(mode.to_string()))?,
        };
        Ok(ClientConfig {
            api_base_url: normalize_base_url(&base)?,
            session_mode,
            request_timeout: raw
                .request_timeout_secs
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        })
    }
}

/// Resolves the deployment configuration for this process.
pub async fn load() -> Result<ClientConfig, ConfigError> {
    let config = ClientConfig::try_from(resolve().await?)?;
    log::info!(
        "API client configured for {} ({} mode)",
        config.api_base_url,
        config.session_mode
    );
    Ok(config)
}

#[cfg(not(target_arch = "wasm32"))]
async fn resolve() -> Result<RuntimeConfig, ConfigError> {
    Ok(RuntimeConfig::from_env()?.or(RuntimeConfig::from_file(CONFIG_FILE)?))
}

#[cfg(target_arch = "wasm32")]
async fn resolve() -> Result<RuntimeConfig, ConfigError> {
    let globals = RuntimeConfig::from_env()?;
    Ok(globals.or(browser::fetch_config_file().await?))
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::MissingBaseUrl);
    }
    match Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {
            Ok(trimmed.to_string())
        }
        _ => Err(ConfigError::InvalidBaseUrl(raw.to_string())),
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{ConfigError, RuntimeConfig, CONFIG_FILE};
    use reqwest::Url;

    // Written by env.js at deploy time, e.g. window.__HR_ADMIN_ENV = { API_BASE_URL: "..." }.
    const ENV_GLOBAL: &str = "__HR_ADMIN_ENV";
    const CONFIG_GLOBAL: &str = "__HR_ADMIN_CONFIG";

    fn global_value(global: &str, key: &str) -> Option<String> {
        let window = crate::utils::storage::window().ok()?;
        let object = js_sys::Reflect::get(&window, &global.into()).ok()?;
        if object.is_undefined() || object.is_null() {
            return None;
        }
        let value = js_sys::Reflect::get(&object, &key.into()).ok()?;
        value
            .as_string()
            .or_else(|| value.as_f64().map(|n| n.to_string()))
    }

    pub fn env_global(key: &str) -> Option<String> {
        global_value(ENV_GLOBAL, key)
    }

    pub fn config_global(key: &str) -> Option<String> {
        global_value(CONFIG_GLOBAL, key)
    }

    fn config_file_url() -> Option<Url> {
        let href = crate::utils::storage::window()
            .ok()?
            .location()
            .href()
            .ok()?;
        Url::parse(&href).ok()?.join(CONFIG_FILE).ok()
    }

    /// `./config.json` next to the page. An absent or unreachable file is an empty config.
    pub async fn fetch_config_file() -> Result<RuntimeConfig, ConfigError> {
        let Some(url) = config_file_url() else {
            return Ok(RuntimeConfig::default());
        };
        let response = match reqwest::Client::new().get(url.clone()).send().await {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                log::debug!("{} returned {}", url, response.status());
                return Ok(RuntimeConfig::default());
            }
            Err(err) => {
                log::debug!("{} unavailable: {}", url, err);
                return Ok(RuntimeConfig::default());
            }
        };
        let raw = response
            .text()
            .await
            .map_err(|e| ConfigError::Malformed(e.to_string()))?;
        RuntimeConfig::from_json(&raw)
    }
}
