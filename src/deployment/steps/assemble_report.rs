use std::sync::Arc;

use tracing::instrument;

use super::portal::PortalDeployment;
use crate::config::Config;
use crate::deployment::DeploymentContext;
use crate::report::Report;
use crate::serde_utils;

pub const REPORT_PATH: &str = "report.yml";

#[instrument(skip_all)]
pub async fn assemble_report(
    context: Arc<DeploymentContext>,
    config: Arc<Config>,
    portal: &PortalDeployment,
) -> eyre::Result<()> {
    let report = Report {
        config: config.as_ref().clone(),
        portal: Some(portal.clone()),
    };

    let path = context.deployment_dir.join(REPORT_PATH);
    serde_utils::write_serialize(path, report).await?;

    Ok(())
}
