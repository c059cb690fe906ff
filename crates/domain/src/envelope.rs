//! JSON request bodies with scope injection

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::{ClientdError, Result};

/// Ordered JSON object sent as a POST body.
///
/// Caller fields keep their serialization order; injected scope fields are
/// appended after them and always replace a caller field of the same name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RequestEnvelope(Map<String, Value>);

impl RequestEnvelope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode `body` into an envelope.
    ///
    /// Unit and `null` bodies produce an empty object.
    ///
    /// # Errors
    ///
    /// Returns [`ClientdError::InvalidRequest`] if `body` fails to serialize
    /// or does not encode as a JSON object.
    pub fn from_body<B: Serialize + ?Sized>(body: &B) -> Result<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| ClientdError::invalid_request(format!("failed to encode body: {}", e)))?;

        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::new()),
            other => Err(ClientdError::invalid_request(format!(
                "request body must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Insert `key`, replacing any caller-supplied value.
    ///
    /// A replaced key moves to the end so injected fields always follow the
    /// caller's fields.
    pub fn inject(&mut self, key: &str, value: impl Into<Value>) {
        if self.0.contains_key(key) {
            self.0 = std::mem::take(&mut self.0).into_iter().filter(|(k, _)| k != key).collect();
        }
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Spend {
        amount_msat: u64,
        allow_overpay: bool,
        timeout: u64,
    }

    #[test]
    fn injected_fields_follow_caller_fields() {
        let mut envelope =
            RequestEnvelope::from_body(&Spend { amount_msat: 3000, allow_overpay: true, timeout: 1000 })
                .unwrap();
        envelope.inject("federationId", "fed1...cd3");

        assert_eq!(
            serde_json::to_string(&envelope).unwrap(),
            r#"{"amountMsat":3000,"allowOverpay":true,"timeout":1000,"federationId":"fed1...cd3"}"#
        );
    }

    #[test]
    fn injection_overwrites_caller_value() {
        let mut envelope =
            RequestEnvelope::from_body(&json!({"federationId": "caller", "notes": "abc"})).unwrap();
        envelope.inject("federationId", "client-default");

        assert_eq!(envelope.get("federationId"), Some(&json!("client-default")));
        assert_eq!(envelope.keys().collect::<Vec<_>>(), vec!["notes", "federationId"]);
    }

    #[test]
    fn unit_body_is_empty_object() {
        let envelope = RequestEnvelope::from_body(&()).unwrap();
        assert!(envelope.is_empty());
        assert_eq!(envelope.into_value(), json!({}));
    }

    #[test]
    fn non_object_body_is_rejected() {
        let err = RequestEnvelope::from_body(&vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, ClientdError::InvalidRequest { .. }));
        assert!(err.to_string().contains("an array"));
    }
}
