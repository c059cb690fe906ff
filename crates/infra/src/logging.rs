//! Tracing setup and structured call logging.

use std::time::Duration;

use fmcd_domain::ClientdError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `default_directive`. Returns `false` when
/// a global subscriber was already installed, which leaves it untouched.
pub fn init_tracing(default_directive: &str, json: bool) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let result = if json { builder.json().try_init() } else { builder.try_init() };
    result.is_ok()
}

/// Log the outcome of one API call with structured fields.
///
/// `endpoint` should be the route path; request bodies and credentials are
/// never passed here.
#[inline]
pub fn log_call_outcome(endpoint: &str, elapsed: Duration, error: Option<&ClientdError>) {
    let duration_ms = elapsed.as_millis() as u64;

    match error {
        None => info!(endpoint, duration_ms, "api_call_success"),
        Some(err) => warn!(
            endpoint,
            duration_ms,
            error_type = err.label(),
            status = err.status(),
            "api_call_failure"
        ),
    }
}
