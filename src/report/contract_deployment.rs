use ethers::types::Address;
use serde::{Deserialize, Serialize};

use crate::artifact_utils::DeployOutput;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ContractDeployment {
    pub address: Address,
}

impl From<DeployOutput> for ContractDeployment {
    fn from(value: DeployOutput) -> Self {
        Self {
            address: value.deployed_to,
        }
    }
}
