//! Route table for fedimint-clientd.
//!
//! Every domain method dispatches through one of these entries; the table is
//! the single place that decides the HTTP verb and which scope fields are
//! injected.

use std::fmt;

use reqwest::Method;

/// Scope fields injected into a POST body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Body sent as given.
    None,
    /// `federationId` injected.
    Federation,
    /// `federationId` and `gatewayId` injected.
    FederationAndGateway,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    // admin
    Info,
    Config,
    FederationIds,
    DiscoverVersion,
    Join,
    ListOperations,
    Backup,
    // mint
    DecodeNotes,
    EncodeNotes,
    Reissue,
    Spend,
    Validate,
    Split,
    Combine,
    // lightning
    CreateInvoice,
    CreateTweakedInvoice,
    ClaimTweakedReceives,
    AwaitInvoice,
    Pay,
    AwaitPay,
    ListGateways,
    // onchain
    DepositAddress,
    AwaitDeposit,
    Withdraw,
}

impl Endpoint {
    pub const ALL: [Endpoint; 24] = [
        Endpoint::Info,
        Endpoint::Config,
        Endpoint::FederationIds,
        Endpoint::DiscoverVersion,
        Endpoint::Join,
        Endpoint::ListOperations,
        Endpoint::Backup,
        Endpoint::DecodeNotes,
        Endpoint::EncodeNotes,
        Endpoint::Reissue,
        Endpoint::Spend,
        Endpoint::Validate,
        Endpoint::Split,
        Endpoint::Combine,
        Endpoint::CreateInvoice,
        Endpoint::CreateTweakedInvoice,
        Endpoint::ClaimTweakedReceives,
        Endpoint::AwaitInvoice,
        Endpoint::Pay,
        Endpoint::AwaitPay,
        Endpoint::ListGateways,
        Endpoint::DepositAddress,
        Endpoint::AwaitDeposit,
        Endpoint::Withdraw,
    ];

    /// Path relative to the versioned base URL.
    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::Info => "/admin/info",
            Endpoint::Config => "/admin/config",
            Endpoint::FederationIds => "/admin/federation-ids",
            Endpoint::DiscoverVersion => "/admin/discover-version",
            Endpoint::Join => "/admin/join",
            Endpoint::ListOperations => "/admin/list-operations",
            Endpoint::Backup => "/admin/backup",
            Endpoint::DecodeNotes => "/mint/decode-notes",
            Endpoint::EncodeNotes => "/mint/encode-notes",
            Endpoint::Reissue => "/mint/reissue",
            Endpoint::Spend => "/mint/spend",
            Endpoint::Validate => "/mint/validate",
            Endpoint::Split => "/mint/split",
            Endpoint::Combine => "/mint/combine",
            Endpoint::CreateInvoice => "/ln/invoice",
            Endpoint::CreateTweakedInvoice => "/ln/invoice-external-pubkey-tweaked",
            Endpoint::ClaimTweakedReceives => "/ln/claim-external-receive-tweaked",
            Endpoint::AwaitInvoice => "/ln/await-invoice",
            Endpoint::Pay => "/ln/pay",
            Endpoint::AwaitPay => "/ln/await-pay",
            Endpoint::ListGateways => "/ln/list-gateways",
            Endpoint::DepositAddress => "/onchain/deposit-address",
            Endpoint::AwaitDeposit => "/onchain/await-deposit",
            Endpoint::Withdraw => "/onchain/withdraw",
        }
    }

    pub fn method(self) -> Method {
        match self {
            Endpoint::Info | Endpoint::Config | Endpoint::FederationIds => Method::GET,
            _ => Method::POST,
        }
    }

    pub const fn scope(self) -> Scope {
        match self {
            Endpoint::Info
            | Endpoint::Config
            | Endpoint::FederationIds
            | Endpoint::DiscoverVersion
            | Endpoint::Join
            | Endpoint::DecodeNotes
            | Endpoint::EncodeNotes
            | Endpoint::Split
            | Endpoint::Combine => Scope::None,
            Endpoint::CreateInvoice | Endpoint::CreateTweakedInvoice | Endpoint::Pay => {
                Scope::FederationAndGateway
            }
            Endpoint::ListOperations
            | Endpoint::Backup
            | Endpoint::Reissue
            | Endpoint::Spend
            | Endpoint::Validate
            | Endpoint::ClaimTweakedReceives
            | Endpoint::AwaitInvoice
            | Endpoint::AwaitPay
            | Endpoint::ListGateways
            | Endpoint::DepositAddress
            | Endpoint::AwaitDeposit
            | Endpoint::Withdraw => Scope::Federation,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
