use std::path::PathBuf;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use crate::artifact_utils::{ArtifactDeploy, ContractArtifact};
use crate::ethers_utils::RpcSigner;
use crate::report::Report;

pub struct DeploymentContext {
    pub deployment_dir: PathBuf,
    pub config_dir: PathBuf,
    pub nonce: AtomicU64,
    pub report: Report,
    pub rpc_signer: Arc<RpcSigner>,
}

impl DeploymentContext {
    pub fn next_nonce(&self) -> u64 {
        self.nonce.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
    }

    pub fn artifact_deploy(
        &self,
        artifact: ContractArtifact,
    ) -> ArtifactDeploy {
        ArtifactDeploy::new(artifact)
            .with_signer(self.rpc_signer.clone())
            .with_override_nonce(self.next_nonce())
    }
}
