use std::sync::Arc;
use std::time::Duration;

use ethers::contract::ContractFactory;
use ethers::types::{Address, H256};
use eyre::{Context, ContextCompat};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::artifact::ContractArtifact;
use crate::ethers_utils::{self, RpcSigner};

pub struct ArtifactDeploy {
    artifact: ContractArtifact,
    signer: Option<Arc<RpcSigner>>,
    override_nonce: Option<u64>,
    confirmations: usize,
    code_poll_interval: Duration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployOutput {
    pub deployer: Address,
    pub deployed_to: Address,
    pub transaction_hash: H256,
}

impl ArtifactDeploy {
    pub fn new(artifact: ContractArtifact) -> Self {
        Self {
            artifact,
            signer: None,
            override_nonce: None,
            confirmations: 1,
            code_poll_interval: Duration::from_secs(7),
        }
    }

    pub fn with_signer(mut self, signer: Arc<RpcSigner>) -> Self {
        self.signer = Some(signer);
        self
    }

    pub fn with_override_nonce(mut self, override_nonce: u64) -> Self {
        self.override_nonce = Some(override_nonce);
        self
    }

    pub fn with_confirmations(mut self, confirmations: usize) -> Self {
        self.confirmations = confirmations;
        self
    }

    pub fn with_code_poll_interval(
        mut self,
        code_poll_interval: Duration,
    ) -> Self {
        self.code_poll_interval = code_poll_interval;
        self
    }

    #[instrument(
        name = "artifact_deploy",
        skip_all,
        fields(contract = %self.artifact.contract_name)
    )]
    pub async fn run(self) -> eyre::Result<DeployOutput> {
        let signer = self.signer.context("ArtifactDeploy missing signer")?;
        let client = signer.0.clone();

        let factory = ContractFactory::new(
            self.artifact.abi.clone(),
            self.artifact.bytecode.clone(),
            client.clone(),
        );

        // The portal constructor takes no arguments
        let mut deployment_tx =
            factory.deploy(())?.confirmations(self.confirmations);

        if let Some(nonce) = self.override_nonce {
            deployment_tx.tx.set_nonce(nonce);
        }

        info!("Deploying {}", self.artifact.contract_name);

        let (contract, receipt) = deployment_tx
            .send_with_receipt()
            .await
            .context("Awaiting deployment receipt")?;

        if receipt.status != Some(1.into()) {
            eyre::bail!(
                "Deployment transaction {:?} reverted",
                receipt.transaction_hash
            );
        }

        ethers_utils::wait_for_deployed_code(
            &client,
            contract.address(),
            self.code_poll_interval,
        )
        .await?;

        let output = DeployOutput {
            deployer: receipt.from,
            deployed_to: contract.address(),
            transaction_hash: receipt.transaction_hash,
        };

        info!("Deployed: {output:?}");

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use ethers::abi::Abi;
    use ethers::types::Bytes;
    use indoc::indoc;

    use super::*;

    #[test]
    fn deploy_output_uses_camel_case_keys() {
        let output: DeployOutput = serde_json::from_str(indoc! {r#"
            {
              "deployer": "0x90f8bf6a479f320ead074411a4b0e7944ea8c9c1",
              "deployedTo": "0xe7f1725e7734ce288f8367e1bb143e90bb3f0512",
              "transactionHash": "0x414d31c4ca6e19eb0c6a0dd8e4a6e1a7c976e38b4bfeca85f6f4b969a3a0d4bd"
            }
        "#})
        .unwrap();

        assert_eq!(
            output.deployed_to,
            "0xe7f1725e7734ce288f8367e1bb143e90bb3f0512"
                .parse::<Address>()
                .unwrap()
        );

        let round_trip = serde_json::to_string(&output).unwrap();
        assert!(round_trip.contains("deployedTo"));
        assert!(round_trip.contains("transactionHash"));
    }

    #[tokio::test]
    async fn run_requires_a_signer() {
        let artifact = ContractArtifact {
            contract_name: "NFTversePortal".to_string(),
            abi: Abi::default(),
            bytecode: Bytes::from(vec![0x60, 0x80]),
        };

        let err = ArtifactDeploy::new(artifact).run().await.unwrap_err();

        assert!(err.to_string().contains("missing signer"));
    }
}
