//! Typed client for the fedimint-clientd REST API
//!
//! Four primitives (`get`, `post`, `post_with_scope`,
//! `post_with_dual_scope`) carry every request. Domain methods in the sibling
//! modules only pick an [`Endpoint`] and a request/response pair.

use std::time::{Duration, Instant};

use fmcd_domain::constants::{FEDERATION_ID_FIELD, GATEWAY_ID_FIELD, HEALTH_CHECK_TIMEOUT, HEALTH_PATH};
use fmcd_domain::{ClientConfig, ClientdError, RequestEnvelope, Result, ScopeOverrides};
use parking_lot::RwLock;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::endpoints::{Endpoint, Scope};
use crate::errors::InfraError;
use crate::http::HttpClient;
use crate::logging::log_call_outcome;

/// Default federation and gateway injected when a call gives no override.
#[derive(Debug, Clone, Default)]
struct ScopeDefaults {
    federation_id: String,
    gateway_id: String,
}

/// Client for one fedimint-clientd instance.
///
/// `Send + Sync`; share it through an `Arc`. Scope setters take `&self` and
/// are visible to calls issued after they return.
pub struct FedimintClient {
    http: HttpClient,
    base_url: String,
    root_url: String,
    password: String,
    timeout: Duration,
    scope: RwLock<ScopeDefaults>,
}

impl FedimintClient {
    /// Create a client from a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientdError::Configuration`] if the base URL or password is
    /// missing or malformed.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let timeout = config.timeout();
        Self::connect(config, timeout)
    }

    fn connect(config: ClientConfig, timeout: Duration) -> Result<Self> {
        config.validate_target()?;
        if timeout.is_zero() {
            return Err(ClientdError::configuration("timeout must be greater than zero"));
        }

        let mut http = HttpClient::builder().timeout(timeout);
        if let Some(agent) = &config.user_agent {
            http = http.user_agent(agent.clone());
        }

        Ok(Self {
            http: http.build()?,
            base_url: config.resolved_base_url(),
            root_url: config.root_url(),
            timeout,
            scope: RwLock::new(ScopeDefaults {
                federation_id: config.active_federation_id,
                gateway_id: config.active_gateway_id,
            }),
            password: config.password,
        })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> FedimintClientBuilder {
        FedimintClientBuilder::default()
    }

    /// Versioned base URL every path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn active_federation_id(&self) -> String {
        self.scope.read().federation_id.clone()
    }

    pub fn active_gateway_id(&self) -> String {
        self.scope.read().gateway_id.clone()
    }

    pub fn set_active_gateway_id(&self, gateway_id: impl Into<String>) {
        let gateway_id = gateway_id.into();
        info!(gateway_id = %gateway_id, "Changed active gateway id");
        self.scope.write().gateway_id = gateway_id;
    }

    /// Switch the default federation.
    ///
    /// With `use_default_gateway` the federation's first gateway becomes the
    /// default gateway; otherwise the default gateway is cleared, since it
    /// belonged to the previous federation.
    ///
    /// # Errors
    ///
    /// Propagates any failure of [`FedimintClient::use_default_gateway`]. The
    /// federation switch itself is kept in that case.
    pub async fn set_active_federation_id(
        &self,
        federation_id: impl Into<String>,
        use_default_gateway: bool,
    ) -> Result<()> {
        let federation_id = federation_id.into();
        info!(federation_id = %federation_id, "Changed active federation id");

        {
            let mut scope = self.scope.write();
            scope.federation_id = federation_id;
            scope.gateway_id.clear();
        }

        if use_default_gateway {
            self.use_default_gateway().await?;
        } else {
            info!("Cleared active gateway id; pass one per call or select a default gateway");
        }
        Ok(())
    }

    /// Make the first gateway listed for the active federation the default.
    ///
    /// # Errors
    ///
    /// Returns [`ClientdError::MissingScope`] if the federation lists no
    /// gateways, or any error from the list-gateways call.
    pub async fn use_default_gateway(&self) -> Result<String> {
        let gateways = self.list_gateways(None).await?;
        let gateway = gateways.into_iter().next().ok_or_else(|| {
            ClientdError::missing_scope("active federation has no registered gateways")
        })?;

        let gateway_id = gateway.info.gateway_id;
        self.set_active_gateway_id(gateway_id.clone());
        Ok(gateway_id)
    }

    /// Issue a GET to `base_url + path`.
    ///
    /// # Errors
    ///
    /// `Http` for non-2xx statuses, `Transport` for network failures and
    /// timeouts, `Decode` if the body does not match `T`.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "GET request");

        let result = self.execute(Method::GET, &url, None).await;
        if result.is_ok() {
            info!(path = %path, "GET request successful");
        }
        result
    }

    /// Issue a POST with `body` serialized as the JSON payload.
    ///
    /// # Errors
    ///
    /// As [`FedimintClient::get`], plus `InvalidRequest` if `body` does not
    /// encode as a JSON object.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let envelope = RequestEnvelope::from_body(body)?;
        self.post_envelope(path, envelope).await
    }

    /// As [`FedimintClient::post`], with `federationId` injected.
    ///
    /// The override wins over the default federation. The injected value
    /// replaces any `federationId` already present in `body`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientdError::MissingScope`] without sending anything if no
    /// federation ID resolves.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post_with_scope<B, T>(
        &self,
        path: &str,
        body: &B,
        federation_id: Option<&str>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let overrides = ScopeOverrides::from_options(federation_id.map(str::to_owned), None);
        let envelope = self.scoped_envelope(body, &overrides, Scope::Federation)?;
        self.post_envelope(path, envelope).await
    }

    /// As [`FedimintClient::post_with_scope`], with `gatewayId` injected as
    /// well.
    ///
    /// # Errors
    ///
    /// Returns [`ClientdError::MissingScope`] without sending anything if no
    /// federation or gateway ID resolves.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post_with_dual_scope<B, T>(
        &self,
        path: &str,
        body: &B,
        federation_id: Option<&str>,
        gateway_id: Option<&str>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let overrides = ScopeOverrides::from_options(
            federation_id.map(str::to_owned),
            gateway_id.map(str::to_owned),
        );
        let envelope = self.scoped_envelope(body, &overrides, Scope::FederationAndGateway)?;
        self.post_envelope(path, envelope).await
    }

    /// Dispatch `endpoint` through the primitive its scope requires.
    ///
    /// GET endpoints ignore `body` and `overrides`.
    pub async fn call<B, T>(&self, endpoint: Endpoint, body: &B, overrides: &ScopeOverrides) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let started = Instant::now();

        let result = if endpoint.method() == Method::GET {
            self.get(endpoint.path()).await
        } else {
            match endpoint.scope() {
                Scope::None => self.post(endpoint.path(), body).await,
                scope => match self.scoped_envelope(body, overrides, scope) {
                    Ok(envelope) => self.post_envelope(endpoint.path(), envelope).await,
                    Err(err) => Err(err),
                },
            }
        };

        log_call_outcome(endpoint.path(), started.elapsed(), result.as_ref().err());
        result
    }

    /// Probe the server's liveness route, which sits outside `/v2`.
    ///
    /// # Returns
    ///
    /// `true` on a 2xx answer, `false` on any other status.
    ///
    /// # Errors
    ///
    /// Returns [`ClientdError::Transport`] if the server cannot be reached.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<bool> {
        let url = format!("{}{}", self.root_url, HEALTH_PATH);
        debug!(url = %url, "Health check");

        let request = self.http.request(Method::GET, &url);
        let response = tokio::time::timeout(HEALTH_CHECK_TIMEOUT, self.http.send(request))
            .await
            .map_err(|_| {
                warn!("Health check timeout");
                ClientdError::transport(format!(
                    "health check timed out after {}s",
                    HEALTH_CHECK_TIMEOUT.as_secs()
                ))
            })?;

        match response {
            Ok(resp) if resp.status().is_success() => {
                info!("fedimint-clientd is healthy");
                Ok(true)
            }
            Ok(resp) => {
                warn!(status = %resp.status(), "fedimint-clientd returned non-success status");
                Ok(false)
            }
            Err(e) => {
                warn!(error = %e, "Health check failed");
                Err(e)
            }
        }
    }

    /// Build the body for a scoped call, failing before any I/O if a
    /// required scope is unresolved.
    fn scoped_envelope<B: Serialize + ?Sized>(
        &self,
        body: &B,
        overrides: &ScopeOverrides,
        scope: Scope,
    ) -> Result<RequestEnvelope> {
        let mut envelope = RequestEnvelope::from_body(body)?;
        if scope == Scope::None {
            return Ok(envelope);
        }

        let defaults = self.scope.read().clone();

        let federation_id = overrides.resolve_federation(&defaults.federation_id);
        if federation_id.is_empty() {
            return Err(ClientdError::missing_scope(
                "no federation ID supplied and no active federation set",
            ));
        }
        envelope.inject(FEDERATION_ID_FIELD, federation_id);

        if scope == Scope::FederationAndGateway {
            let gateway_id = overrides.resolve_gateway(&defaults.gateway_id);
            if gateway_id.is_empty() {
                return Err(ClientdError::missing_scope(
                    "no gateway ID supplied and no active gateway set",
                ));
            }
            envelope.inject(GATEWAY_ID_FIELD, gateway_id);
        }

        Ok(envelope)
    }

    async fn post_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
        envelope: RequestEnvelope,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, fields = envelope.len(), "POST request");

        let result = self.execute(Method::POST, &url, Some(envelope)).await;
        if result.is_ok() {
            info!(path = %path, "POST request successful");
        }
        result
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<RequestEnvelope>,
    ) -> Result<T> {
        let mut request = self
            .http
            .request(method, url)
            .header("Authorization", format!("Bearer {}", self.password));
        if let Some(body) = &body {
            request = request.header(CONTENT_TYPE, "application/json").json(body);
        }

        let response = match tokio::time::timeout(self.timeout, self.http.send(request)).await {
            Ok(Ok(resp)) => resp,
            Ok(Err(err)) => return Err(err),
            Err(_) => {
                return Err(ClientdError::transport(format!(
                    "request to {} timed out after {:?}",
                    url, self.timeout
                )))
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => format!("<unreadable body: {}>", e),
            };
            warn!(url = %url, status = status.as_u16(), "fedimint-clientd returned error status");
            return Err(ClientdError::http(status.as_u16(), body));
        }

        // Handle 204/205 No Content responses
        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            return serde_json::from_value(serde_json::Value::Null).map_err(|_| {
                ClientdError::decode(format!(
                    "No content response ({}), but response type cannot be deserialized from empty body",
                    status.as_u16()
                ))
            });
        }

        let bytes = response.bytes().await.map_err(|e| ClientdError::from(InfraError::from(e)))?;
        serde_json::from_slice(&bytes).map_err(|e| ClientdError::from(InfraError::from(e)))
    }
}

/// Builder for [`FedimintClient`]
#[derive(Debug, Default)]
pub struct FedimintClientBuilder {
    config: ClientConfig,
    timeout: Option<Duration>,
}

impl FedimintClientBuilder {
    /// Start from an existing configuration
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Server root, e.g. `http://127.0.0.1:3333`; `/v2` is appended.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config.password = password.into();
        self
    }

    pub fn active_federation_id(mut self, federation_id: impl Into<String>) -> Self {
        self.config.active_federation_id = federation_id.into();
        self
    }

    pub fn active_gateway_id(mut self, gateway_id: impl Into<String>) -> Self {
        self.config.active_gateway_id = gateway_id.into();
        self
    }

    /// Per-request timeout; takes precedence over `timeout_secs` in the
    /// configuration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    ///
    /// # Errors
    ///
    /// Returns [`ClientdError::Configuration`] if base URL or password is
    /// missing or malformed, or if the timeout is zero.
    pub fn build(self) -> Result<FedimintClient> {
        match self.timeout {
            Some(timeout) => FedimintClient::connect(self.config, timeout),
            None => FedimintClient::from_config(self.config),
        }
    }
}
