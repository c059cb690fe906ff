//! Mint group: spending, receiving and transforming ecash notes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::NotesJson;
use crate::constants::MSATS_PER_SAT;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeNotesRequest {
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeNotesResponse {
    pub notes_json: NotesJson,
}

/// Notes travel as a JSON string inside the JSON body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodeNotesRequest {
    pub notes_json_str: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeNotesResponse {
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReissueRequest {
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReissueResponse {
    pub amount_msat: u64,
}

/// Parameters for pulling notes out of the wallet.
///
/// `timeout` is in seconds; after it elapses the wallet tries to reissue
/// notes nobody claimed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendRequest {
    pub amount_msat: u64,
    pub allow_overpay: bool,
    pub timeout: u64,
    pub include_invite: bool,
}

impl SpendRequest {
    pub fn msats(amount_msat: u64) -> Self {
        Self { amount_msat, ..Default::default() }
    }

    /// Amounts past `u64::MAX` msat saturate.
    pub fn sats(amount_sat: u64) -> Self {
        Self::msats(amount_sat.saturating_mul(MSATS_PER_SAT))
    }

    pub fn allow_overpay(mut self, allow: bool) -> Self {
        self.allow_overpay = allow;
        self
    }

    pub fn timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    pub fn include_invite(mut self, include: bool) -> Self {
        self.include_invite = include;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendResponse {
    pub operation: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateRequest {
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    pub amount_msat: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitRequest {
    pub notes: String,
}

/// Denomination in msat → single-note string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitResponse {
    pub notes: BTreeMap<u64, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombineRequest {
    pub notes_vec: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombineResponse {
    pub notes: String,
}
