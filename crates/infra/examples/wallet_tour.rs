//! Example: walking through the main fedimint-clientd calls
//!
//! Loads the connection settings with the standard loader, checks the
//! server, optionally joins a federation, and then runs a few read-only and
//! low-value calls against the active federation.
//!
//! # Setup
//!
//! 1. Run fedimint-clientd locally.
//!
//! 2. Set up environment variables (or an `.env` / `fmcd.toml` file):
//!    ```bash
//!    export FEDIMINT_CLIENTD_BASE_URL=http://127.0.0.1:3333
//!    export FEDIMINT_CLIENTD_PASSWORD=password
//!    export FEDIMINT_CLIENTD_ACTIVE_FEDERATION_ID=...
//!    # optional: join a federation first
//!    export FMCD_INVITE_CODE=fed11...
//!    ```
//!
//! 3. Run this example: `cargo run --example wallet_tour`

use fmcd_domain::{InvoiceRequest, JoinOptions, SpendRequest};
use fmcd_infra::{config, init_tracing, FedimintClient};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("info,fmcd_infra=debug", false);

    let client = FedimintClient::from_config(config::load()?)?;

    if !client.health_check().await? {
        warn!("fedimint-clientd is up but reports unhealthy");
    }

    if let Ok(invite_code) = std::env::var("FMCD_INVITE_CODE") {
        let joined = client
            .join(
                JoinOptions::new(invite_code)
                    .set_active_federation_id(true)
                    .use_default_gateway(true),
            )
            .await?;
        info!(federation_id = %joined.this_federation_id, "joined");
    } else if client.active_gateway_id().is_empty() && !client.active_federation_id().is_empty() {
        let gateway_id = client.use_default_gateway().await?;
        info!(%gateway_id, "using first listed gateway");
    }

    let ids = client.federation_ids().await?;
    info!(count = ids.federation_ids.len(), "joined federations");

    for (federation_id, federation) in client.info().await? {
        info!(
            %federation_id,
            network = %federation.network,
            balance_msat = federation.total_amount_msat,
            "federation"
        );
    }

    let operations = client.list_operations(10, None).await?;
    info!(count = operations.operations().len(), "recent operations");

    let invoice = client
        .create_invoice(InvoiceRequest::sats(10).description("wallet tour"), None, None)
        .await?;
    info!(operation_id = %invoice.operation_id, invoice = %invoice.invoice, "created invoice");

    // Spend to ourselves and immediately claim the notes back.
    match client.spend(SpendRequest::sats(1).allow_overpay(true).timeout(60), None).await {
        Ok(spent) => {
            let decoded = client.decode_notes(&spent.notes).await?;
            info!(amount_msat = ?decoded.notes_json.total_amount_msat(), "spent notes");

            let reissued = client.reissue(&spent.notes, None).await?;
            info!(amount_msat = reissued.amount_msat, "reissued notes");
        }
        Err(err) => warn!(error = %err, "spend failed; wallet may be empty"),
    }

    let deposit = client.deposit_address(3600, None).await?;
    info!(address = %deposit.address, operation_id = %deposit.operation_id, "deposit address");

    Ok(())
}
