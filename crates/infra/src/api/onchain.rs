//! Onchain calls: peg-in and peg-out.

use fmcd_domain::{
    AwaitDepositRequest, AwaitDepositResponse, DepositAddressRequest, DepositAddressResponse,
    Result, ScopeOverrides, WithdrawAmount, WithdrawRequest, WithdrawResponse,
};

use super::client::FedimintClient;
use super::endpoints::Endpoint;

impl FedimintClient {
    /// Request a deposit address watched for `timeout` seconds.
    pub async fn deposit_address(
        &self,
        timeout: u64,
        federation_id: Option<&str>,
    ) -> Result<DepositAddressResponse> {
        self.call(
            Endpoint::DepositAddress,
            &DepositAddressRequest { timeout },
            &ScopeOverrides::from_options(federation_id.map(str::to_owned), None),
        )
        .await
    }

    /// Wait for a deposit to the address from `deposit_address` to settle.
    pub async fn await_deposit(
        &self,
        operation_id: &str,
        federation_id: Option<&str>,
    ) -> Result<AwaitDepositResponse> {
        self.call(
            Endpoint::AwaitDeposit,
            &AwaitDepositRequest { operation_id: operation_id.to_owned() },
            &ScopeOverrides::from_options(federation_id.map(str::to_owned), None),
        )
        .await
    }

    pub async fn withdraw(
        &self,
        address: &str,
        amount: WithdrawAmount,
        federation_id: Option<&str>,
    ) -> Result<WithdrawResponse> {
        self.call(
            Endpoint::Withdraw,
            &WithdrawRequest { address: address.to_owned(), amount_sat: amount },
            &ScopeOverrides::from_options(federation_id.map(str::to_owned), None),
        )
        .await
    }
}
