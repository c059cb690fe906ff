//! Admin calls: federation membership, versions, operation log and backups.

use std::collections::BTreeMap;

use fmcd_domain::{
    BackupRequest, DiscoverVersionRequest, DiscoverVersionResponse, FederationIdsResponse,
    InfoResponse, JoinOptions, JoinResponse, ListOperationsRequest, ListOperationsResponse,
    Result, ScopeOverrides,
};
use serde_json::Value;
use tracing::info;

use super::client::FedimintClient;
use super::endpoints::Endpoint;

impl FedimintClient {
    /// Holdings and metadata for every joined federation.
    pub async fn info(&self) -> Result<InfoResponse> {
        self.call(Endpoint::Info, &(), &ScopeOverrides::none()).await
    }

    /// The server's client configuration, as raw JSON.
    pub async fn config(&self) -> Result<Value> {
        self.call(Endpoint::Config, &(), &ScopeOverrides::none()).await
    }

    pub async fn federation_ids(&self) -> Result<FederationIdsResponse> {
        self.call(Endpoint::FederationIds, &(), &ScopeOverrides::none()).await
    }

    /// Common API version to use with each federation and its modules.
    pub async fn discover_version(
        &self,
        threshold: Option<usize>,
    ) -> Result<DiscoverVersionResponse> {
        self.call(
            Endpoint::DiscoverVersion,
            &DiscoverVersionRequest { threshold },
            &ScopeOverrides::none(),
        )
        .await
    }

    /// Join a federation by invite code.
    ///
    /// When `options.set_active_federation_id` is set, the joined federation
    /// becomes the default scope, and `options.use_default_gateway` then also
    /// selects its first gateway. A failure in either side effect is returned
    /// even though the join itself succeeded.
    pub async fn join(&self, options: JoinOptions) -> Result<JoinResponse> {
        let response: JoinResponse =
            self.call(Endpoint::Join, &options.to_request(), &ScopeOverrides::none()).await?;
        info!(federation_id = %response.this_federation_id, "Joined federation");

        if options.set_active_federation_id {
            self.set_active_federation_id(
                response.this_federation_id.clone(),
                options.use_default_gateway,
            )
            .await?;
        }

        Ok(response)
    }

    /// Most recent operations performed on a federation.
    pub async fn list_operations(
        &self,
        limit: usize,
        federation_id: Option<&str>,
    ) -> Result<ListOperationsResponse> {
        self.call(
            Endpoint::ListOperations,
            &ListOperationsRequest { limit },
            &ScopeOverrides::from_options(federation_id.map(str::to_owned), None),
        )
        .await
    }

    /// Upload an encrypted snapshot of the wallet to the federation.
    pub async fn backup(
        &self,
        metadata: BTreeMap<String, String>,
        federation_id: Option<&str>,
    ) -> Result<()> {
        self.call(
            Endpoint::Backup,
            &BackupRequest { metadata },
            &ScopeOverrides::from_options(federation_id.map(str::to_owned), None),
        )
        .await
    }
}
