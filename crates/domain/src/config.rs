//! Connection configuration for a fedimint-clientd instance

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::{API_VERSION_PATH, DEFAULT_TIMEOUT};
use crate::errors::{ClientdError, Result};

/// Connection settings owned by a single client instance.
///
/// `active_federation_id` and `active_gateway_id` are the default scopes
/// injected into module calls. Either may be empty as long as every call
/// that needs it supplies an explicit override.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub password: String,
    #[serde(default)]
    pub active_federation_id: String,
    #[serde(default)]
    pub active_gateway_id: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            password: String::new(),
            active_federation_id: String::new(),
            active_gateway_id: String::new(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, password: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), password: password.into(), ..Default::default() }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check that the configuration can issue requests.
    ///
    /// # Errors
    ///
    /// Returns [`ClientdError::Configuration`] if the base URL or password is
    /// empty, if the base URL is not an absolute http(s) URL, or if the
    /// timeout is zero.
    pub fn validate(&self) -> Result<()> {
        self.validate_target()?;
        if self.timeout_secs == 0 {
            return Err(ClientdError::configuration("timeout_secs must be greater than zero"));
        }
        Ok(())
    }

    /// Check the server address and credential only.
    ///
    /// # Errors
    ///
    /// Returns [`ClientdError::Configuration`] if the base URL or password is
    /// empty, or if the base URL is not an absolute http(s) URL.
    pub fn validate_target(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(ClientdError::configuration("base_url must be set"));
        }
        if self.password.is_empty() {
            return Err(ClientdError::configuration("password must be set"));
        }

        let parsed = Url::parse(self.base_url.trim()).map_err(|e| {
            ClientdError::configuration(format!("invalid base_url '{}': {}", self.base_url, e))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientdError::configuration(format!(
                "base_url must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        Ok(())
    }

    /// Root URL of the server, without the API version segment.
    pub fn root_url(&self) -> String {
        self.base_url.trim().trim_end_matches('/').to_string()
    }

    /// Base URL every API path is appended to, e.g. `http://host:3333/v2`.
    pub fn resolved_base_url(&self) -> String {
        format!("{}{}", self.root_url(), API_VERSION_PATH)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("password", &"<redacted>")
            .field("active_federation_id", &self.active_federation_id)
            .field("active_gateway_id", &self.active_gateway_id)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Per-call replacements for the client's default scopes.
///
/// An empty string is treated the same as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeOverrides {
    pub federation_id: Option<String>,
    pub gateway_id: Option<String>,
}

impl ScopeOverrides {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn federation(federation_id: impl Into<String>) -> Self {
        Self { federation_id: Some(federation_id.into()), gateway_id: None }
    }

    pub fn with_gateway(mut self, gateway_id: impl Into<String>) -> Self {
        self.gateway_id = Some(gateway_id.into());
        self
    }

    pub fn from_options(federation_id: Option<String>, gateway_id: Option<String>) -> Self {
        Self { federation_id, gateway_id }
    }

    /// Resolve the federation ID: override first, then `default`.
    pub fn resolve_federation<'a>(&'a self, default: &'a str) -> &'a str {
        resolve(self.federation_id.as_deref(), default)
    }

    /// Resolve the gateway ID: override first, then `default`.
    pub fn resolve_gateway<'a>(&'a self, default: &'a str) -> &'a str {
        resolve(self.gateway_id.as_deref(), default)
    }
}

fn resolve<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_complete_config() {
        let config = ClientConfig::new("http://127.0.0.1:3333", "password");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_base_url() {
        let config = ClientConfig::new("", "password");
        assert!(matches!(config.validate(), Err(ClientdError::Configuration { .. })));
    }

    #[test]
    fn validate_rejects_empty_password() {
        let config = ClientConfig::new("http://127.0.0.1:3333", "");
        assert!(matches!(config.validate(), Err(ClientdError::Configuration { .. })));
    }

    #[test]
    fn validate_rejects_non_http_scheme() {
        let config = ClientConfig::new("ftp://127.0.0.1", "password");
        assert!(matches!(config.validate(), Err(ClientdError::Configuration { .. })));

        let config = ClientConfig::new("127.0.0.1:3333", "password");
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = ClientConfig::new("http://127.0.0.1:3333", "password");
        config.timeout_secs = 0;
        assert!(config.validate_target().is_ok());
        match config.validate() {
            Err(ClientdError::Configuration { message }) => assert!(message.contains("timeout")),
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn resolved_base_url_appends_version_once() {
        let config = ClientConfig::new("http://localhost:3333/", "pw");
        assert_eq!(config.resolved_base_url(), "http://localhost:3333/v2");
        assert_eq!(config.root_url(), "http://localhost:3333");
    }

    #[test]
    fn debug_output_redacts_password() {
        let config = ClientConfig::new("http://localhost:3333", "hunter2");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn overrides_fall_back_to_defaults() {
        let overrides = ScopeOverrides::none();
        assert_eq!(overrides.resolve_federation("fed-default"), "fed-default");
        assert_eq!(overrides.resolve_gateway(""), "");

        let overrides = ScopeOverrides::federation("").with_gateway("gw-override");
        assert_eq!(overrides.resolve_federation("fed-default"), "fed-default");
        assert_eq!(overrides.resolve_gateway("gw-default"), "gw-override");
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url":"http://h:1","password":"p"}"#).unwrap();
        assert_eq!(config.timeout_secs, 30);
        assert!(config.active_federation_id.is_empty());
        assert!(config.user_agent.is_none());
    }
}
