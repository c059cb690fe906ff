//! Integration test for the encode/decode notes pair
//!
//! The mock server plays the mint: it encodes the JSON form it is sent and
//! decodes the resulting string back.

#![allow(dead_code)]

#[path = "support.rs"]
mod support;

use std::collections::BTreeMap;

use fmcd_domain::{Note, NotesJson};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

const ENCODED: &str = "AwEEFdtsfn0BAAEBAAAAAAAAAAABAqy4s5Ulm";

fn sample_notes() -> NotesJson {
    let mut notes = BTreeMap::new();
    notes.insert(
        "1024".to_string(),
        vec![Note { signature: "a1b2".into(), spend_key: "c3d4".into() }],
    );
    notes.insert(
        "4096".to_string(),
        vec![
            Note { signature: "e5f6".into(), spend_key: "0708".into() },
            Note { signature: "090a".into(), spend_key: "0b0c".into() },
        ],
    );
    NotesJson { federation_id_prefix: "15db8cb4".into(), notes }
}

#[tokio::test]
async fn encode_then_decode_returns_original_notes() {
    let (server, client) = support::scoped().await;
    let notes = sample_notes();
    let notes_json_str = serde_json::to_string(&notes).unwrap();

    Mock::given(method("POST"))
        .and(path("/v2/mint/encode-notes"))
        .and(body_json(json!({"notesJsonStr": notes_json_str})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"notes": ENCODED})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/mint/decode-notes"))
        .and(body_json(json!({"notes": ENCODED})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"notesJson": notes})))
        .expect(1)
        .mount(&server)
        .await;

    let encoded = client.encode_notes(&notes).await.unwrap();
    let decoded = client.decode_notes(&encoded.notes).await.unwrap();

    assert_eq!(decoded.notes_json, notes);
    assert_eq!(decoded.notes_json.total_amount_msat(), Some(1024 + 2 * 4096));
}
