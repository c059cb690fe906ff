//! Integration test driving every domain method against the route table
//!
//! Each call is checked against its `Endpoint` entry: verb, path, and which
//! scope fields end up in the body.

#![allow(dead_code)]

#[path = "support.rs"]
mod support;

use std::collections::{BTreeMap, HashSet};

use fmcd_domain::{
    InvoiceRequest, JoinOptions, NotesJson, PayRequest, SpendRequest, TweakedInvoiceRequest,
    WithdrawAmount,
};
use fmcd_infra::{Endpoint, Scope};
use serde_json::{json, Value};
use support::{FEDERATION_ID, GATEWAY_ID};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn canned_response(endpoint: Endpoint) -> Value {
    let pay = json!({
        "operationId": "op",
        "paymentType": {"internal": "op"},
        "contractId": "c",
        "fee": 0
    });
    let notes = json!({"federation_id_prefix": "15db8cb4", "notes": {}});

    match endpoint {
        Endpoint::Info => json!({
            FEDERATION_ID: {
                "network": "signet",
                "meta": {"federation_name": "test"},
                "totalAmountMsat": 3000,
                "totalNumNotes": 2,
                "denominationsMsat": {"tiered": {"1024": 1}}
            }
        }),
        Endpoint::Config => json!({"global": {}}),
        Endpoint::FederationIds => json!({"federationIds": [FEDERATION_ID]}),
        Endpoint::DiscoverVersion => json!({FEDERATION_ID: {"core": [0, 0]}}),
        Endpoint::Join => json!({"thisFederationId": FEDERATION_ID, "federationIds": [FEDERATION_ID]}),
        Endpoint::ListOperations => json!({"operations": []}),
        Endpoint::Backup => Value::Null,
        Endpoint::DecodeNotes => json!({"notesJson": notes}),
        Endpoint::EncodeNotes | Endpoint::Combine => json!({"notes": "AwEE"}),
        Endpoint::Reissue | Endpoint::Validate => json!({"amountMsat": 1}),
        Endpoint::Spend => json!({"operation": "op", "notes": "AwEE"}),
        Endpoint::Split => json!({"notes": {"1": "AwEE"}}),
        Endpoint::CreateInvoice | Endpoint::CreateTweakedInvoice => {
            json!({"operationId": "op", "invoice": "lnbc1..."})
        }
        Endpoint::ClaimTweakedReceives | Endpoint::AwaitInvoice => json!({"status": "Claimed"}),
        Endpoint::Pay | Endpoint::AwaitPay => pay,
        Endpoint::ListGateways => json!([support::gateway_json(GATEWAY_ID)]),
        Endpoint::DepositAddress => json!({"operationId": "op", "address": "bc1q...", "tweakIdx": 0}),
        Endpoint::AwaitDeposit => json!({"status": "WaitingForTransaction"}),
        Endpoint::Withdraw => json!({"txid": "ab12", "feesSat": 150}),
    }
}

async fn mount_all(server: &MockServer) {
    for endpoint in Endpoint::ALL {
        Mock::given(method(endpoint.method().as_str()))
            .and(path(format!("/v2{}", endpoint.path())))
            .respond_with(ResponseTemplate::new(200).set_body_json(canned_response(endpoint)))
            .expect(1)
            .mount(server)
            .await;
    }
}

#[tokio::test]
async fn every_endpoint_is_reachable_with_its_declared_scope() {
    let (server, client) = support::scoped().await;
    mount_all(&server).await;

    let info = client.info().await.unwrap();
    assert_eq!(info[FEDERATION_ID].total_amount_msat, 3000);
    client.config().await.unwrap();
    client.federation_ids().await.unwrap();
    client.discover_version(Some(1)).await.unwrap();
    client.join(JoinOptions::new("fed11...")).await.unwrap();
    assert!(client.list_operations(10, None).await.unwrap().operations().is_empty());
    client.backup(BTreeMap::from([("label".to_string(), "daily".to_string())]), None).await.unwrap();

    let empty = NotesJson { federation_id_prefix: "15db8cb4".into(), notes: BTreeMap::new() };
    client.decode_notes("AwEE").await.unwrap();
    client.encode_notes(&empty).await.unwrap();
    client.reissue("AwEE", None).await.unwrap();
    client.spend(SpendRequest::sats(1), None).await.unwrap();
    client.validate("AwEE", None).await.unwrap();
    client.split("AwEE").await.unwrap();
    client.combine(vec!["AwEE".into()]).await.unwrap();

    client.create_invoice(InvoiceRequest::sats(1), None, None).await.unwrap();
    client
        .create_tweaked_invoice(TweakedInvoiceRequest::new("02ab", 7).sats(1), None, None)
        .await
        .unwrap();
    client.claim_tweaked_receives("secret", vec![7], None).await.unwrap();
    client.await_invoice("op", None).await.unwrap();
    client.pay(PayRequest::new("lnbc1..."), None, None).await.unwrap();
    client.await_pay("op", None).await.unwrap();
    assert_eq!(client.list_gateways(None).await.unwrap()[0].info.gateway_id, GATEWAY_ID);

    let deposit = client.deposit_address(3600, None).await.unwrap();
    assert_eq!(deposit.tweak_idx, Some(0));
    client.await_deposit(&deposit.operation_id, None).await.unwrap();
    let withdrawal = client.withdraw("bc1q...", WithdrawAmount::All, None).await.unwrap();
    assert_eq!(withdrawal.fees_sat, 150);

    let requests = server.received_requests().await.unwrap();
    let mut seen = HashSet::new();
    for request in &requests {
        let route = request.url.path().trim_start_matches("/v2");
        let endpoint = Endpoint::ALL
            .into_iter()
            .find(|e| e.path() == route)
            .unwrap_or_else(|| panic!("unexpected route {}", route));
        seen.insert(endpoint);

        assert_eq!(
            request.headers.get("authorization").and_then(|v| v.to_str().ok()),
            Some("Bearer test-password")
        );

        if endpoint.method() == reqwest::Method::GET {
            assert!(request.body.is_empty(), "{} sent a body", endpoint);
            continue;
        }

        let body: Value = serde_json::from_slice(&request.body).unwrap();
        let has_federation = body.get("federationId").is_some();
        let has_gateway = body.get("gatewayId").is_some();
        match endpoint.scope() {
            Scope::None => assert!(!has_federation && !has_gateway, "{} leaked scope", endpoint),
            Scope::Federation => {
                assert_eq!(body["federationId"], FEDERATION_ID, "{}", endpoint);
                assert!(!has_gateway, "{} leaked gateway", endpoint);
            }
            Scope::FederationAndGateway => {
                assert_eq!(body["federationId"], FEDERATION_ID, "{}", endpoint);
                assert_eq!(body["gatewayId"], GATEWAY_ID, "{}", endpoint);
            }
        }
    }
    assert_eq!(seen.len(), Endpoint::ALL.len());
}
