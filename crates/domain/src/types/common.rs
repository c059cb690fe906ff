//! Records shared by more than one API group.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Holdings and metadata for one joined federation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FederationInfo {
    pub network: String,
    #[serde(default)]
    pub meta: BTreeMap<String, String>,
    pub total_amount_msat: u64,
    pub total_num_notes: u64,
    /// Tiered summary as reported by the server; its shape differs between
    /// server releases so it is kept as raw JSON.
    #[serde(default)]
    pub denominations_msat: Value,
}

/// One entry from the client's operation log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationOutput {
    pub id: String,
    pub creation_time: String,
    pub operation_kind: String,
    #[serde(default)]
    pub operation_meta: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Value>,
}

/// Single ecash note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub signature: String,
    pub spend_key: String,
}

/// JSON form of an out-of-band notes string.
///
/// Keys of `notes` are denominations in msat, rendered as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesJson {
    pub federation_id_prefix: String,
    pub notes: BTreeMap<String, Vec<Note>>,
}

impl NotesJson {
    /// Sum of all note denominations, skipping keys that are not integers.
    ///
    /// `None` if the total does not fit in a `u64`.
    pub fn total_amount_msat(&self) -> Option<u64> {
        self.notes
            .iter()
            .filter_map(|(denomination, notes)| {
                denomination.parse::<u64>().ok().map(|d| (d, notes.len()))
            })
            .try_fold(0u64, |total, (denomination, count)| {
                let count = u64::try_from(count).ok()?;
                total.checked_add(denomination.checked_mul(count)?)
            })
    }
}

/// Receive-side state of a Lightning invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LnReceiveState {
    #[serde(alias = "Created")]
    Created,
    #[serde(alias = "WaitingForPayment")]
    WaitingForPayment { invoice: String, timeout: Value },
    #[serde(alias = "Canceled")]
    Canceled { reason: Value },
    #[serde(alias = "Funded")]
    Funded,
    #[serde(alias = "AwaitingFunds")]
    AwaitingFunds,
    #[serde(alias = "Claimed")]
    Claimed,
}

impl LnReceiveState {
    /// True once no further state transition can happen.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Claimed | Self::Canceled { .. })
    }
}

/// How an outgoing Lightning payment was routed. Carries the operation ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayType {
    /// Paid to another user of the same federation without a gateway.
    #[serde(alias = "Internal")]
    Internal(String),
    /// Paid through a Lightning gateway.
    #[serde(alias = "Lightning")]
    Lightning(String),
}

impl PayType {
    pub fn operation_id(&self) -> &str {
        match self {
            Self::Internal(id) | Self::Lightning(id) => id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayFees {
    #[serde(alias = "baseMsat")]
    pub base_msat: u32,
    #[serde(alias = "proportionalMillionths")]
    pub proportional_millionths: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayTtl {
    pub nanos: u32,
    pub secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayInfo {
    pub api: String,
    pub fees: GatewayFees,
    pub gateway_id: String,
    #[serde(default)]
    pub gateway_redeem_key: String,
    #[serde(default)]
    pub lightning_alias: String,
    #[serde(default)]
    pub mint_channel_id: u64,
    #[serde(default)]
    pub node_pub_key: String,
    #[serde(default)]
    pub route_hints: Vec<Value>,
    #[serde(default)]
    pub supports_private_payments: bool,
}

/// Lightning gateway registered with a federation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gateway {
    pub federation_id: String,
    pub info: GatewayInfo,
    pub vetted: bool,
    pub ttl: GatewayTtl,
}
