//! Wire-level constants shared by the client and its tests.

use std::time::Duration;

/// Version segment appended to every configured base URL.
pub const API_VERSION_PATH: &str = "/v2";

/// Liveness route served outside the versioned API.
pub const HEALTH_PATH: &str = "/health";

/// Body field carrying the target federation.
pub const FEDERATION_ID_FIELD: &str = "federationId";

/// Body field carrying the Lightning gateway.
pub const GATEWAY_ID_FIELD: &str = "gatewayId";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

pub const MSATS_PER_SAT: u64 = 1_000;
