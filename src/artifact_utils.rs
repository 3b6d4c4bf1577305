pub mod artifact;
pub mod deploy;

pub use self::artifact::{read_artifact, ContractArtifact};
pub use self::deploy::{ArtifactDeploy, DeployOutput};
