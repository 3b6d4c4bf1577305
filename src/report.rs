use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::deployment::steps::portal::PortalDeployment;

pub mod contract_deployment;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Report {
    pub config: Config,

    #[serde(default)]
    pub portal: Option<PortalDeployment>,
}

impl Report {
    pub fn default_with_config(config: &Config) -> Self {
        Self {
            config: config.clone(),
            portal: Default::default(),
        }
    }

    /// Forces the portal to be redeployed on the next run
    pub fn invalidate_portal(&mut self) {
        self.portal = None;
    }
}
