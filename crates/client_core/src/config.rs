//! Client settings resolved once at startup.
//!
//! Layers, lowest to highest precedence: built-in defaults, the TOML config
//! file, environment variables, then whatever flags the front-end applies via
//! [`ClientSettings::with_api_base_url_override`]. Blank values never override.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "pdf_assistant.toml";
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const CONFIG_PATH_ENV: &str = "PDF_ASSISTANT_CONFIG";
// Applied in order, so the app-specific name comes last and wins.
const API_BASE_URL_ENV_VARS: &[&str] = &["APP__API_BASE_URL", "PDF_ASSISTANT_API_URL"];
const LOG_FILTER_ENV_VARS: &[&str] = &["RUST_LOG", "PDF_ASSISTANT_LOG"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub api_base_url: String,
    pub log_filter: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            log_filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}

impl ClientSettings {
    pub fn with_api_base_url_override(mut self, api_base_url: Option<String>) -> Self {
        if let Some(url) = non_blank(api_base_url) {
            self.api_base_url = normalize_url(&url);
        }
        self
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    api_base_url: Option<String>,
    log_filter: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Loads settings from the process environment and the first config file
/// found: `$PDF_ASSISTANT_CONFIG`, `./pdf_assistant.toml`, then
/// `<fallback_dir>/pdf_assistant.toml`.
pub fn load_settings(fallback_dir: Option<&Path>) -> Result<ClientSettings, ConfigError> {
    let env = |name: &str| std::env::var(name).ok();
    let config_file = locate_config_file(fallback_dir, env);
    resolve_settings(config_file.as_deref(), env)
}

fn locate_config_file(
    fallback_dir: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> Option<PathBuf> {
    if let Some(explicit) = non_blank(env(CONFIG_PATH_ENV)) {
        return Some(PathBuf::from(explicit));
    }

    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    fallback_dir
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
}

pub fn resolve_settings(
    config_file: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ClientSettings, ConfigError> {
    let mut settings = ClientSettings::default();

    if let Some(path) = config_file {
        let file_cfg = read_config_file(path)?;
        if let Some(v) = non_blank(file_cfg.api_base_url) {
            settings.api_base_url = v;
        }
        if let Some(v) = non_blank(file_cfg.log_filter) {
            settings.log_filter = v;
        }
    }

    for &name in API_BASE_URL_ENV_VARS {
        if let Some(v) = non_blank(env(name)) {
            settings.api_base_url = v;
        }
    }
    for &name in LOG_FILTER_ENV_VARS {
        if let Some(v) = non_blank(env(name)) {
            settings.log_filter = v;
        }
    }

    settings.api_base_url = normalize_url(&settings.api_base_url);
    Ok(settings)
}

fn read_config_file(path: &Path) -> Result<FileSettings, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn normalize_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
