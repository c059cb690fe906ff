//! Shared helpers for client integration tests against a mocked
//! fedimint-clientd.

use fmcd_infra::FedimintClient;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const PASSWORD: &str = "test-password";
pub const FEDERATION_ID: &str = "15db8cb4f1ec8e484d73b889372bec94812580f929e8148b7437d359af422cd3";
pub const GATEWAY_ID: &str = "035f2f7912e0f570841d5c0d8976a40af0dcca5609198436f596e78d2c851ee58a";

/// Client against `server` with the given default scopes.
pub fn client(server: &MockServer, federation_id: &str, gateway_id: &str) -> FedimintClient {
    FedimintClient::builder()
        .base_url(server.uri())
        .password(PASSWORD)
        .active_federation_id(federation_id)
        .active_gateway_id(gateway_id)
        .build()
        .expect("client should build")
}

/// Mock server plus a client scoped to [`FEDERATION_ID`] and [`GATEWAY_ID`].
pub async fn scoped() -> (MockServer, FedimintClient) {
    let server = MockServer::start().await;
    let client = client(&server, FEDERATION_ID, GATEWAY_ID);
    (server, client)
}

/// Raw text of the `index`-th request the server received.
pub async fn body_text(server: &MockServer, index: usize) -> String {
    let requests = server.received_requests().await.expect("request recording enabled");
    String::from_utf8(requests[index].body.clone()).expect("utf-8 body")
}

pub async fn body_json(server: &MockServer, index: usize) -> Value {
    serde_json::from_str(&body_text(server, index).await).expect("json body")
}

/// Gateway announcement as list-gateways returns it.
pub fn gateway_json(gateway_id: &str) -> Value {
    json!({
        "federation_id": FEDERATION_ID,
        "info": {
            "api": "https://gateway.example.com/",
            "fees": {"base_msat": 0, "proportional_millionths": 10000},
            "gateway_id": gateway_id,
            "gateway_redeem_key": "02aa",
            "lightning_alias": "example-gw",
            "mint_channel_id": 7,
            "node_pub_key": "03bb",
            "route_hints": [],
            "supports_private_payments": true
        },
        "vetted": true,
        "ttl": {"nanos": 0, "secs": 600}
    })
}
