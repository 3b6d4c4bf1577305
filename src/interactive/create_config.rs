use std::path::PathBuf;

use super::utils::{
    prompt_text_handle_errors, prompt_text_skippable_handle_errors,
};
use crate::config::{Config, MiscConfig, PortalConfig};
use crate::types::{Confirmations, PollIntervalMs};

pub async fn create_config_interactive() -> eyre::Result<PathBuf> {
    let config_path = loop {
        let filename = inquire::Text::new("Config filename:").prompt()?;

        let config_path = PathBuf::from(filename);

        if config_path.exists() {
            let overwrite =
                inquire::Confirm::new("Overwrite existing file?").prompt()?;

            if !overwrite {
                continue;
            }
        }

        break config_path;
    };

    let name = inquire::Text::new("Contract name:")
        .with_default("NFTversePortal")
        .prompt()?;

    let artifact: PathBuf =
        prompt_text_handle_errors("Path to the compiled artifact:")?;

    let confirmations: Confirmations =
        prompt_text_handle_errors("Confirmations to wait for:")?;

    let poll_interval_ms: PollIntervalMs =
        prompt_text_skippable_handle_errors(
            "Poll interval in ms (Esc for default):",
        )?
        .unwrap_or(PollIntervalMs(7000));

    let config = Config {
        portal: PortalConfig { name, artifact },
        misc: MiscConfig {
            confirmations,
            poll_interval_ms,
        },
    };

    crate::serde_utils::write_serialize(&config_path, config).await?;

    Ok(config_path)
}
