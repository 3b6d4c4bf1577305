use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::{Confirmations, PollIntervalMs};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub portal: PortalConfig,
    pub misc: MiscConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Contract name the artifact must match
    pub name: String,

    /// Path to the compiled artifact, relative paths resolve against the
    /// config file location
    pub artifact: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiscConfig {
    #[serde(default = "default_confirmations")]
    pub confirmations: Confirmations,

    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: PollIntervalMs,
}

fn default_confirmations() -> Confirmations {
    Confirmations(1)
}

fn default_poll_interval_ms() -> PollIntervalMs {
    PollIntervalMs(7000)
}

impl Config {
    pub fn artifact_path(&self, config_dir: &Path) -> PathBuf {
        if self.portal.artifact.is_absolute() {
            self.portal.artifact.clone()
        } else {
            config_dir.join(&self.portal.artifact)
        }
    }
}

impl MiscConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.0)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn misc_section_defaults() {
        let config: Config = serde_yaml::from_str(indoc! {r#"
            portal:
              name: NFTversePortal
              artifact: artifacts/contracts/NFTversePortal.sol/NFTversePortal.json
            misc: {}
        "#})
        .unwrap();

        assert_eq!(config.misc.confirmations, Confirmations(1));
        assert_eq!(config.misc.poll_interval_ms, PollIntervalMs(7000));
        assert_eq!(config.misc.poll_interval(), Duration::from_millis(7000));
    }

    #[test]
    fn explicit_misc_section() {
        let config: Config = serde_yaml::from_str(indoc! {r#"
            portal:
              name: NFTversePortal
              artifact: portal.json
            misc:
              confirmations: 5
              poll_interval_ms: 250
        "#})
        .unwrap();

        assert_eq!(config.misc.confirmations, Confirmations(5));
        assert_eq!(config.misc.poll_interval(), Duration::from_millis(250));
    }

    #[test]
    fn artifact_path_resolution() {
        let config: Config = serde_yaml::from_str(indoc! {r#"
            portal:
              name: NFTversePortal
              artifact: portal.json
            misc: {}
        "#})
        .unwrap();

        assert_eq!(
            config.artifact_path(Path::new("deployments/goerli")),
            PathBuf::from("deployments/goerli/portal.json")
        );

        let mut config = config;
        config.portal.artifact = PathBuf::from("/abs/portal.json");

        assert_eq!(
            config.artifact_path(Path::new("deployments/goerli")),
            PathBuf::from("/abs/portal.json")
        );
    }
}
