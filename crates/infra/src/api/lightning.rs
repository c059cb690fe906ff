//! Lightning calls: invoices, payments and gateways.

use fmcd_domain::{
    AwaitInvoiceRequest, AwaitPayRequest, ClaimTweakedReceivesRequest, Gateway, InvoiceRequest,
    InvoiceResponse, ListGatewaysRequest, LnReceiveStatusResponse, PayRequest, PayResponse,
    Result, ScopeOverrides, TweakedInvoiceRequest,
};

use super::client::FedimintClient;
use super::endpoints::Endpoint;

impl FedimintClient {
    /// Create an invoice routed through the active (or given) gateway.
    pub async fn create_invoice(
        &self,
        request: InvoiceRequest,
        federation_id: Option<&str>,
        gateway_id: Option<&str>,
    ) -> Result<InvoiceResponse> {
        self.call(Endpoint::CreateInvoice, &request, &scopes(federation_id, gateway_id)).await
    }

    /// Create an invoice claimable by the holder of the tweaked external key.
    pub async fn create_tweaked_invoice(
        &self,
        request: TweakedInvoiceRequest,
        federation_id: Option<&str>,
        gateway_id: Option<&str>,
    ) -> Result<InvoiceResponse> {
        self.call(Endpoint::CreateTweakedInvoice, &request, &scopes(federation_id, gateway_id))
            .await
    }

    /// Claim every receive made to tweaked invoices of `private_key`.
    pub async fn claim_tweaked_receives(
        &self,
        private_key: &str,
        tweaks: Vec<u64>,
        federation_id: Option<&str>,
    ) -> Result<LnReceiveStatusResponse> {
        self.call(
            Endpoint::ClaimTweakedReceives,
            &ClaimTweakedReceivesRequest { private_key: private_key.to_owned(), tweaks },
            &scopes(federation_id, None),
        )
        .await
    }

    /// Wait until an invoice reaches a final state.
    pub async fn await_invoice(
        &self,
        operation_id: &str,
        federation_id: Option<&str>,
    ) -> Result<LnReceiveStatusResponse> {
        self.call(
            Endpoint::AwaitInvoice,
            &AwaitInvoiceRequest { operation_id: operation_id.to_owned() },
            &scopes(federation_id, None),
        )
        .await
    }

    /// Pay a bolt11 invoice or LNURL.
    pub async fn pay(
        &self,
        request: PayRequest,
        federation_id: Option<&str>,
        gateway_id: Option<&str>,
    ) -> Result<PayResponse> {
        self.call(Endpoint::Pay, &request, &scopes(federation_id, gateway_id)).await
    }

    pub async fn await_pay(
        &self,
        operation_id: &str,
        federation_id: Option<&str>,
    ) -> Result<PayResponse> {
        self.call(
            Endpoint::AwaitPay,
            &AwaitPayRequest { operation_id: operation_id.to_owned() },
            &scopes(federation_id, None),
        )
        .await
    }

    /// Gateways registered with a federation.
    pub async fn list_gateways(&self, federation_id: Option<&str>) -> Result<Vec<Gateway>> {
        self.call(Endpoint::ListGateways, &ListGatewaysRequest {}, &scopes(federation_id, None))
            .await
    }
}

fn scopes(federation_id: Option<&str>, gateway_id: Option<&str>) -> ScopeOverrides {
    ScopeOverrides::from_options(federation_id.map(str::to_owned), gateway_id.map(str::to_owned))
}
