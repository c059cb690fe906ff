//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Loads a `.env` file from the working directory, if present
//! 2. Attempts to load from environment variables
//! 3. If incomplete, falls back to loading from file
//! 4. Probes multiple paths for config files
//! 5. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `FEDIMINT_CLIENTD_BASE_URL`: Server root, without `/v2` (required)
//! - `FEDIMINT_CLIENTD_PASSWORD`: Bearer credential (required)
//! - `FEDIMINT_CLIENTD_ACTIVE_FEDERATION_ID`: Default federation
//! - `FEDIMINT_CLIENTD_ACTIVE_GATEWAY_ID`: Default gateway
//! - `FEDIMINT_CLIENTD_TIMEOUT_SECS`: Per-request timeout in seconds
//! - `FEDIMINT_CLIENTD_USER_AGENT`: User-Agent header override
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./fmcd.json` or `./fmcd.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names in the parent directory

use std::path::{Path, PathBuf};

use fmcd_domain::{ClientConfig, ClientdError, Result};

pub const BASE_URL_VAR: &str = "FEDIMINT_CLIENTD_BASE_URL";
pub const PASSWORD_VAR: &str = "FEDIMINT_CLIENTD_PASSWORD";
pub const FEDERATION_ID_VAR: &str = "FEDIMINT_CLIENTD_ACTIVE_FEDERATION_ID";
pub const GATEWAY_ID_VAR: &str = "FEDIMINT_CLIENTD_ACTIVE_GATEWAY_ID";
pub const TIMEOUT_VAR: &str = "FEDIMINT_CLIENTD_TIMEOUT_SECS";
pub const USER_AGENT_VAR: &str = "FEDIMINT_CLIENTD_USER_AGENT";

/// Load configuration with automatic fallback strategy
///
/// Reads `.env` first, then environment variables. If a required variable
/// is missing, falls back to a config file.
///
/// # Errors
/// Returns `ClientdError::Configuration` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<ClientConfig> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }

    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `ClientdError::Configuration` if a required variable is missing
/// or a value is invalid.
pub fn load_from_env() -> Result<ClientConfig> {
    let mut config = ClientConfig::new(env_var(BASE_URL_VAR)?, env_var(PASSWORD_VAR)?);
    config.active_federation_id = std::env::var(FEDERATION_ID_VAR).unwrap_or_default();
    config.active_gateway_id = std::env::var(GATEWAY_ID_VAR).unwrap_or_default();
    config.user_agent = std::env::var(USER_AGENT_VAR).ok().filter(|s| !s.is_empty());

    if let Ok(raw) = std::env::var(TIMEOUT_VAR) {
        config.timeout_secs = raw.trim().parse::<u64>().map_err(|e| {
            ClientdError::configuration(format!("Invalid {}: {}", TIMEOUT_VAR, e))
        })?;
    }

    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. JSON and TOML are
/// both accepted (detected by file extension).
///
/// # Errors
/// Returns `ClientdError::Configuration` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ClientdError::configuration(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ClientdError::configuration("No config file found in any of the standard locations")
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ClientdError::configuration(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ClientdError::configuration(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ClientdError::configuration(format!("Invalid JSON format: {}", e))),
        _ => Err(ClientdError::configuration(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    candidate_paths(&cwd).into_iter().find(|path| path.exists())
}

fn candidate_paths(dir: &Path) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    for base in [dir.to_path_buf(), dir.join("..")] {
        for name in ["fmcd.json", "fmcd.toml", "config.json", "config.toml"] {
            candidates.push(base.join(name));
        }
    }
    candidates
}

/// Get required environment variable
///
/// Empty values count as missing.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty()).ok_or_else(|| {
        ClientdError::configuration(format!("Missing required environment variable: {}", key))
    })
}
