use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use super::error::ConfigError;
use crate::sri::{SriClient, TaxpayerLookup};
use crate::utils::{config, file_utils};

/// Settings resolved once at startup and shared through the app context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub api_base_url: String,
    pub request_timeout: Duration,
}

/// On-disk form of `~/.sri-consulta/settings.json`; every key is optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
}

/// Result type for settings operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Everything the search page needs from startup, provided as app context
#[derive(Clone)]
pub struct LookupContext {
    pub settings: AppSettings,
    pub lookup: Arc<dyn TaxpayerLookup>,
}

impl LookupContext {
    /// Resolves settings and builds the HTTP backend.
    pub fn from_environment() -> ConfigResult<Self> {
        let settings = load_settings()?;
        let lookup = build_lookup(&settings)?;
        tracing::info!(
            api_base_url = %settings.api_base_url,
            timeout_ms = settings.request_timeout.as_millis() as u64,
            "lookup backend configured"
        );
        Ok(Self { settings, lookup })
    }
}

/// Creates the HTTP-backed lookup for the configured base URL.
pub fn build_lookup(settings: &AppSettings) -> ConfigResult<Arc<dyn TaxpayerLookup>> {
    let http_client = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ConfigError::ClientCreation(e.to_string()))?;
    Ok(Arc::new(SriClient::new(http_client, &settings.api_base_url)))
}

/// Loads settings from the environment and the user's settings file.
pub fn load_settings() -> ConfigResult<AppSettings> {
    let from_env = std::env::var(config::API_URL_ENV).ok();
    let file = match file_utils::settings_file_path() {
        Some(path) => read_settings_file(&path)?,
        None => None,
    };
    resolve_settings(from_env, file)
}

/// Reads the settings file. A missing file is not an error.
pub fn read_settings_file(path: &Path) -> ConfigResult<Option<SettingsFile>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    let parsed = serde_json::from_str(&content)?;
    tracing::debug!(path = %path.display(), "loaded settings file");
    Ok(Some(parsed))
}

/// Environment wins over the settings file for the base URL.
pub fn resolve_settings(
    from_env: Option<String>,
    file: Option<SettingsFile>,
) -> ConfigResult<AppSettings> {
    let file = file.unwrap_or_default();

    let api_base_url = from_env
        .filter(|url| !url.trim().is_empty())
        .or(file.api_base_url.filter(|url| !url.trim().is_empty()))
        .ok_or(ConfigError::MissingBaseUrl)?;
    let api_base_url = api_base_url.trim().to_string();

    match reqwest::Url::parse(&api_base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        _ => return Err(ConfigError::InvalidBaseUrl(api_base_url)),
    }

    let request_timeout = Duration::from_millis(
        file.request_timeout_ms
            .filter(|ms| *ms > 0)
            .unwrap_or(config::REQUEST_TIMEOUT_MS),
    );

    Ok(AppSettings {
        api_base_url,
        request_timeout,
    })
}
