use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::artifact_utils::read_artifact;
use crate::config::Config;
use crate::deployment::DeploymentContext;
use crate::report::contract_deployment::ContractDeployment;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PortalDeployment {
    pub portal_deployment: ContractDeployment,
}

#[instrument(skip_all)]
async fn deploy_portal(
    context: &DeploymentContext,
    config: &Config,
) -> eyre::Result<ContractDeployment> {
    if let Some(previous_deployment) = context.report.portal.as_ref() {
        info!(
            "Portal already deployed to {:?}",
            previous_deployment.portal_deployment.address
        );

        return Ok(previous_deployment.portal_deployment.clone());
    }

    let artifact_path = config.artifact_path(&context.config_dir);
    let artifact = read_artifact(&artifact_path).await?;

    if artifact.contract_name != config.portal.name {
        eyre::bail!(
            "Artifact {} is for contract {}, config expects {}",
            artifact_path.display(),
            artifact.contract_name,
            config.portal.name
        );
    }

    let output = context
        .artifact_deploy(artifact)
        .with_confirmations(config.misc.confirmations.0)
        .with_code_poll_interval(config.misc.poll_interval())
        .run()
        .await?;

    Ok(output.into())
}

#[instrument(name = "portal", skip_all)]
pub async fn deploy(
    context: Arc<DeploymentContext>,
    config: Arc<Config>,
) -> eyre::Result<PortalDeployment> {
    let portal_deployment =
        deploy_portal(context.as_ref(), config.as_ref()).await?;

    Ok(PortalDeployment { portal_deployment })
}
