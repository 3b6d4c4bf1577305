use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use ethers::prelude::SignerMiddleware;
use ethers::providers::{Middleware, Provider};
use ethers::signers::{Signer, Wallet};

use self::steps::assemble_report::{self, REPORT_PATH};
use self::steps::portal;
use crate::config::Config;
use crate::ethers_utils::RpcSigner;
use crate::report::Report;
use crate::serde_utils;

pub mod cmd;
pub mod deployment_context;
pub mod steps;

pub use self::cmd::Cmd;
pub use self::deployment_context::DeploymentContext;

pub async fn run_deployment(cmd: Cmd) -> eyre::Result<()> {
    let config: Config = serde_utils::read_deserialize(&cmd.config).await?;

    let config_dir = cmd
        .config
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .to_owned();

    let deployment_dir = PathBuf::from(&cmd.deployment_name);

    tokio::fs::create_dir_all(&deployment_dir).await?;

    let provider = Provider::try_from(cmd.rpc_url.as_str())?
        .interval(config.misc.poll_interval());
    let chain_id = provider.get_chainid().await?;
    let wallet = Wallet::from(cmd.private_key.key.clone())
        .with_chain_id(chain_id.as_u64());

    let wallet_address = wallet.address();

    let signer = SignerMiddleware::new(provider, wallet);

    let nonce = signer.get_transaction_count(wallet_address, None).await?;

    let rpc_signer = Arc::new(RpcSigner(Arc::new(signer)));

    let report_path = deployment_dir.join(REPORT_PATH);
    let report: Report = if report_path.exists() {
        serde_utils::read_deserialize::<Report>(&report_path).await?
    } else {
        Report::default_with_config(&config)
    };

    let context = DeploymentContext {
        deployment_dir,
        config_dir,
        nonce: AtomicU64::new(nonce.as_u64()),
        report,
        rpc_signer,
    };

    let context = Arc::new(context);
    let config = Arc::new(config);

    let portal = portal::deploy(context.clone(), config.clone()).await?;

    assemble_report::assemble_report(context, config, &portal).await?;

    println!(
        "NFTversePortal contract deployed to: {:?}",
        portal.portal_deployment.address
    );

    Ok(())
}
