//! Lightning group: invoices, payments and gateways.

use serde::{Deserialize, Serialize};

use super::common::{LnReceiveState, PayType};
use crate::constants::MSATS_PER_SAT;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRequest {
    pub amount_msat: u64,
    pub description: String,
    /// Seconds until the invoice expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_time: Option<u64>,
}

impl InvoiceRequest {
    pub fn msats(amount_msat: u64) -> Self {
        Self { amount_msat, ..Default::default() }
    }

    /// Amounts past `u64::MAX` msat saturate.
    pub fn sats(amount_sat: u64) -> Self {
        Self::msats(amount_sat.saturating_mul(MSATS_PER_SAT))
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn expiry_time(mut self, seconds: u64) -> Self {
        self.expiry_time = Some(seconds);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceResponse {
    pub operation_id: String,
    pub invoice: String,
}

/// Invoice whose contract locks funds to `external_pubkey` tweaked by
/// `tweak`, so another key holder can claim it later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TweakedInvoiceRequest {
    pub amount_msat: u64,
    pub description: String,
    pub external_pubkey: String,
    pub tweak: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_time: Option<u64>,
}

impl TweakedInvoiceRequest {
    pub fn new(external_pubkey: impl Into<String>, tweak: u64) -> Self {
        Self { external_pubkey: external_pubkey.into(), tweak, ..Default::default() }
    }

    pub fn msats(mut self, amount_msat: u64) -> Self {
        self.amount_msat = amount_msat;
        self
    }

    /// Amounts past `u64::MAX` msat saturate.
    pub fn sats(self, amount_sat: u64) -> Self {
        self.msats(amount_sat.saturating_mul(MSATS_PER_SAT))
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn expiry_time(mut self, seconds: u64) -> Self {
        self.expiry_time = Some(seconds);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimTweakedReceivesRequest {
    pub private_key: String,
    pub tweaks: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwaitInvoiceRequest {
    pub operation_id: String,
}

/// Final receive state returned by await-invoice and claim calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LnReceiveStatusResponse {
    pub status: LnReceiveState,
}

/// Pay a bolt11 invoice or LNURL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayRequest {
    pub payment_info: String,
    /// Required for amountless invoices and LNURLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_msat: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lnurl_comment: Option<String>,
}

impl PayRequest {
    pub fn new(payment_info: impl Into<String>) -> Self {
        Self { payment_info: payment_info.into(), ..Default::default() }
    }

    pub fn msats(mut self, amount_msat: u64) -> Self {
        self.amount_msat = Some(amount_msat);
        self
    }

    /// Amounts past `u64::MAX` msat saturate.
    pub fn sats(self, amount_sat: u64) -> Self {
        self.msats(amount_sat.saturating_mul(MSATS_PER_SAT))
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.lnurl_comment = Some(comment.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayResponse {
    pub operation_id: String,
    pub payment_type: PayType,
    pub contract_id: String,
    pub fee: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwaitPayRequest {
    pub operation_id: String,
}

/// List-gateways carries nothing but the injected federation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListGatewaysRequest {}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn invoice_request_omits_missing_expiry() {
        let body = serde_json::to_value(InvoiceRequest::sats(10).description("coffee")).unwrap();
        assert_eq!(body, json!({"amountMsat": 10000, "description": "coffee"}));
    }

    #[test]
    fn pay_request_uses_lnurl_comment_field() {
        let body =
            serde_json::to_value(PayRequest::new("lnurl1...").sats(21).comment("thanks")).unwrap();
        assert_eq!(
            body,
            json!({"paymentInfo": "lnurl1...", "amountMsat": 21000, "lnurlComment": "thanks"})
        );
    }

    #[test]
    fn sats_builders_saturate() {
        assert_eq!(InvoiceRequest::sats(u64::MAX).amount_msat, u64::MAX);
        assert_eq!(TweakedInvoiceRequest::new("02ab", 1).sats(u64::MAX / 10).amount_msat, u64::MAX);
        assert_eq!(PayRequest::new("lnbc1...").sats(u64::MAX).amount_msat, Some(u64::MAX));
    }

    #[test]
    fn list_gateways_request_is_empty_object() {
        assert_eq!(serde_json::to_value(ListGatewaysRequest::default()).unwrap(), json!({}));
    }

    #[test]
    fn pay_response_decodes() {
        let response: PayResponse = serde_json::from_value(json!({
            "operationId": "op",
            "paymentType": {"lightning": "op"},
            "contractId": "c",
            "fee": 12
        }))
        .unwrap();
        assert_eq!(response.payment_type.operation_id(), "op");
    }
}
