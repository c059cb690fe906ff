//! Conversions from external infrastructure errors into domain errors.

use fmcd_domain::ClientdError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ClientdError);

impl From<InfraError> for ClientdError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ClientdError> for InfraError {
    fn from(value: ClientdError) -> Self {
        InfraError(value)
    }
}

trait IntoClientdError {
    fn into_clientd(self) -> ClientdError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ClientdError */
/* -------------------------------------------------------------------------- */

impl IntoClientdError for HttpError {
    fn into_clientd(self) -> ClientdError {
        if self.is_decode() {
            return ClientdError::decode(format!("failed to decode response body: {}", self));
        }

        if self.is_timeout() {
            return ClientdError::transport("HTTP request timed out");
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return ClientdError::transport(format!("HTTP connection failure: {}", self));
        }

        if self.is_builder() {
            return ClientdError::transport(format!("failed to build HTTP request: {}", self));
        }

        ClientdError::transport(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_clientd())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → ClientdError */
/* -------------------------------------------------------------------------- */

impl IntoClientdError for JsonError {
    fn into_clientd(self) -> ClientdError {
        ClientdError::decode(format!(
            "response did not match expected shape (line {}, column {}): {}",
            self.line(),
            self.column(),
            self
        ))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_clientd())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
