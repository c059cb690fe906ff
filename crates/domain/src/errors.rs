//! Error types used throughout the client

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for fedimint-clientd calls.
///
/// Every client operation returns this type. No variant is produced for a
/// successful response, and no call is retried after producing one.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientdError {
    /// Base URL or credential missing or malformed at build time.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A federation or gateway ID was required but could not be resolved.
    #[error("Missing scope: {message}")]
    MissingScope { message: String },

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Connection refused, timeout or any other failure below HTTP.
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// The response body was not valid JSON or did not match the expected
    /// shape.
    #[error("Decode error: {message}")]
    Decode { message: String },

    /// The request body could not be encoded as a JSON object.
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },
}

impl ClientdError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    pub fn missing_scope(message: impl Into<String>) -> Self {
        Self::MissingScope { message: message.into() }
    }

    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http { status, body: body.into() }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport { message: message.into() }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode { message: message.into() }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest { message: message.into() }
    }

    /// HTTP status code, if the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Stable label suitable for structured logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Configuration { .. } => "configuration",
            Self::MissingScope { .. } => "missing_scope",
            Self::Http { .. } => "http",
            Self::Transport { .. } => "transport",
            Self::Decode { .. } => "decode",
            Self::InvalidRequest { .. } => "invalid_request",
        }
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientdError>;
