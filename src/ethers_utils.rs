use std::sync::Arc;
use std::time::Duration;

use ethers::prelude::*;
use ethers::types::Address;
use eyre::bail;
use tracing::debug;

// TODO: Allow for different wallet kinds
pub struct RpcSigner(pub Arc<SignerMiddleware<Provider<Http>, LocalWallet>>);

const CODE_POLL_ATTEMPTS: usize = 10;

/// A mined deployment receipt does not guarantee that the node we talk to
/// already serves the contract code. Poll until it does.
pub async fn wait_for_deployed_code(
    client: &SignerMiddleware<Provider<Http>, LocalWallet>,
    address: Address,
    poll_interval: Duration,
) -> eyre::Result<()> {
    for attempt in 1..=CODE_POLL_ATTEMPTS {
        let code = client.get_code(address, None).await?;

        if !code.as_ref().is_empty() {
            return Ok(());
        }

        debug!("No code at {address:?} yet (attempt {attempt})");

        tokio::time::sleep(poll_interval).await;
    }

    bail!(
        "No code at {:?} after {} attempts",
        address,
        CODE_POLL_ATTEMPTS
    )
}
