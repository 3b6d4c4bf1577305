use std::path::Path;

use ethers::abi::Abi;
use ethers::types::Bytes;
use serde::{Deserialize, Serialize};

use crate::serde_utils;

/// The relevant subset of a Hardhat build artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    pub contract_name: String,
    pub abi: Abi,
    pub bytecode: Bytes,
}

pub async fn read_artifact(
    path: impl AsRef<Path>,
) -> eyre::Result<ContractArtifact> {
    let path = path.as_ref();

    let artifact: ContractArtifact =
        serde_utils::read_deserialize_json(path).await?;

    if artifact.bytecode.is_empty() {
        eyre::bail!(
            "Artifact {} has no bytecode, {} is an interface or abstract contract",
            path.display(),
            artifact.contract_name
        );
    }

    Ok(artifact)
}
