//! Admin group: federation membership, versions and the operation log.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{FederationInfo, OperationOutput};

/// Federation ID → holdings.
pub type InfoResponse = HashMap<String, FederationInfo>;

/// Federation ID → negotiated API versions.
pub type DiscoverVersionResponse = HashMap<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FederationIdsResponse {
    pub federation_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoverVersionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub invite_code: String,
    pub use_manual_secret: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinResponse {
    pub this_federation_id: String,
    pub federation_ids: Vec<String>,
}

/// Options for joining a federation.
///
/// The two scope flags control what the client does with the joined
/// federation after the call succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinOptions {
    pub invite_code: String,
    pub set_active_federation_id: bool,
    pub use_default_gateway: bool,
    pub use_manual_secret: bool,
}

impl JoinOptions {
    pub fn new(invite_code: impl Into<String>) -> Self {
        Self {
            invite_code: invite_code.into(),
            set_active_federation_id: false,
            use_default_gateway: false,
            use_manual_secret: false,
        }
    }

    /// Make the joined federation the client's default scope.
    pub fn set_active_federation_id(mut self, enabled: bool) -> Self {
        self.set_active_federation_id = enabled;
        self
    }

    /// Also pick the federation's first gateway as the default gateway.
    /// Only honoured together with `set_active_federation_id`.
    pub fn use_default_gateway(mut self, enabled: bool) -> Self {
        self.use_default_gateway = enabled;
        self
    }

    pub fn use_manual_secret(mut self, enabled: bool) -> Self {
        self.use_manual_secret = enabled;
        self
    }

    pub fn to_request(&self) -> JoinRequest {
        JoinRequest {
            invite_code: self.invite_code.clone(),
            use_manual_secret: self.use_manual_secret,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOperationsRequest {
    pub limit: usize,
}

/// The server has returned both a bare array and a wrapped object across
/// releases; either decodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListOperationsResponse {
    Wrapped { operations: Vec<OperationOutput> },
    Bare(Vec<OperationOutput>),
}

impl ListOperationsResponse {
    pub fn operations(&self) -> &[OperationOutput] {
        match self {
            Self::Wrapped { operations } | Self::Bare(operations) => operations,
        }
    }

    pub fn into_operations(self) -> Vec<OperationOutput> {
        match self {
            Self::Wrapped { operations } | Self::Bare(operations) => operations,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupRequest {
    pub metadata: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn discover_version_omits_missing_threshold() {
        let body = serde_json::to_value(DiscoverVersionRequest::default()).unwrap();
        assert_eq!(body, json!({}));

        let body = serde_json::to_value(DiscoverVersionRequest { threshold: Some(2) }).unwrap();
        assert_eq!(body, json!({"threshold": 2}));
    }

    #[test]
    fn join_options_default_to_no_side_effects() {
        let options = JoinOptions::new("fed11qgq...");
        assert!(!options.set_active_federation_id);
        assert!(!options.use_default_gateway);
        assert_eq!(
            serde_json::to_value(options.to_request()).unwrap(),
            json!({"inviteCode": "fed11qgq...", "useManualSecret": false})
        );
    }

    #[test]
    fn list_operations_accepts_both_shapes() {
        let op = json!({
            "id": "op1",
            "creationTime": "2024-01-01T00:00:00Z",
            "operationKind": "mint",
            "operationMeta": {}
        });

        let bare: ListOperationsResponse = serde_json::from_value(json!([op.clone()])).unwrap();
        let wrapped: ListOperationsResponse =
            serde_json::from_value(json!({"operations": [op]})).unwrap();

        assert_eq!(bare.operations().len(), 1);
        assert_eq!(wrapped.into_operations()[0].operation_kind, "mint");
    }
}
