//! Configuration loading
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes `./config.toml`, `./config.json`, `./stagelink.toml`,
//!    `./stagelink.json`
//!
//! ## Environment Variables
//! - `STAGELINK_API_BASE_URL`: Base URL of the user-directory API
//! - `STAGELINK_API_TOKEN`: Bearer token (optional)
//! - `STAGELINK_API_TIMEOUT_SECS`: Request timeout in seconds (optional)

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use stagelink_domain::{Result, StagelinkError};

use crate::api::ApiClientConfig;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User-directory API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            auth_token: config.auth_token.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables; if the required
/// variables are missing, probes the working directory for a config
/// file.
///
/// # Errors
/// Returns `StagelinkError::Config` if neither source yields a valid
/// configuration.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `StagelinkError::Config` if `STAGELINK_API_BASE_URL` is
/// missing or the timeout is not a valid integer.
pub fn load_from_env() -> Result<Config> {
    let base_url = std::env::var("STAGELINK_API_BASE_URL")
        .map_err(|_| StagelinkError::Config("STAGELINK_API_BASE_URL not set".to_string()))?;
    let auth_token = std::env::var("STAGELINK_API_TOKEN").ok();
    let timeout_secs = match std::env::var("STAGELINK_API_TIMEOUT_SECS") {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| StagelinkError::Config(format!("invalid timeout: {e}")))?,
        Err(_) => DEFAULT_TIMEOUT_SECS,
    };

    Ok(Config { api: ApiConfig { base_url, auth_token, timeout_secs } })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the working directory for known config
/// file names. Supports both TOML and JSON (detected by extension).
///
/// # Errors
/// Returns `StagelinkError::Config` if no file is found or the content
/// fails to parse.
pub fn load_from_file(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => probe_config_paths()
            .ok_or_else(|| StagelinkError::Config("no config file found".to_string()))?,
    };

    let content = std::fs::read_to_string(&path)
        .map_err(|e| StagelinkError::Config(format!("failed to read {}: {e}", path.display())))?;

    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content)
            .map_err(|e| StagelinkError::Config(format!("invalid TOML config: {e}")))?,
        Some("json") => serde_json::from_str(&content)
            .map_err(|e| StagelinkError::Config(format!("invalid JSON config: {e}")))?,
        _ => {
            return Err(StagelinkError::Config(format!(
                "unsupported config format: {}",
                path.display()
            )))
        }
    };

    tracing::info!(path = %path.display(), "configuration loaded from file");
    Ok(config)
}

fn probe_config_paths() -> Option<std::path::PathBuf> {
    ["config.toml", "config.json", "stagelink.toml", "stagelink.json"]
        .iter()
        .map(std::path::PathBuf::from)
        .find(|p| p.exists())
}
