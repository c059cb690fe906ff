//! Onchain group: peg-in deposits and peg-out withdrawals.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositAddressRequest {
    /// Seconds the server watches the address for a deposit.
    pub timeout: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositAddressResponse {
    pub operation_id: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tweak_idx: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwaitDepositRequest {
    pub operation_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BitcoinTransactionData {
    /// Raw transaction as seen in the mempool.
    pub btc_transaction: Value,
    /// Index of the deposit output
    pub out_idx: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DepositState {
    WaitingForTransaction,
    WaitingForConfirmation(BitcoinTransactionData),
    Confirmed(BitcoinTransactionData),
    Claimed(BitcoinTransactionData),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwaitDepositResponse {
    pub status: DepositState,
}

/// Amount to peg out; `All` sweeps the balance minus fees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawAmount {
    Sats(u64),
    All,
}

impl Serialize for WithdrawAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Sats(sats) => serializer.serialize_u64(*sats),
            Self::All => serializer.serialize_str("all"),
        }
    }
}

impl<'de> Deserialize<'de> for WithdrawAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => n
                .as_u64()
                .map(Self::Sats)
                .ok_or_else(|| serde::de::Error::custom("amount must be a non-negative integer")),
            Value::String(s) if s.eq_ignore_ascii_case("all") => Ok(Self::All),
            other => Err(serde::de::Error::custom(format!("invalid withdraw amount: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawRequest {
    pub address: String,
    pub amount_sat: WithdrawAmount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawResponse {
    pub txid: String,
    pub fees_sat: u64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn withdraw_all_serializes_as_string() {
        let request = WithdrawRequest { address: "bc1q...".into(), amount_sat: WithdrawAmount::All };
        assert_eq!(
            serde_json::to_value(request).unwrap(),
            json!({"address": "bc1q...", "amountSat": "all"})
        );
    }

    #[test]
    fn withdraw_amount_parses_numbers_and_all() {
        assert_eq!(
            serde_json::from_value::<WithdrawAmount>(json!(5000)).unwrap(),
            WithdrawAmount::Sats(5000)
        );
        assert_eq!(serde_json::from_value::<WithdrawAmount>(json!("ALL")).unwrap(), WithdrawAmount::All);
        assert!(serde_json::from_value::<WithdrawAmount>(json!("some")).is_err());
    }

    #[test]
    fn deposit_states_decode() {
        let response: AwaitDepositResponse = serde_json::from_value(json!({
            "status": {"Confirmed": {"btc_transaction": {"version": 2}, "out_idx": 1}}
        }))
        .unwrap();
        match response.status {
            DepositState::Confirmed(data) => assert_eq!(data.out_idx, 1),
            other => panic!("expected confirmed deposit, got {:?}", other),
        }

        let failed: AwaitDepositResponse =
            serde_json::from_value(json!({"status": {"Failed": "timeout"}})).unwrap();
        assert_eq!(failed.status, DepositState::Failed("timeout".into()));
    }
}
