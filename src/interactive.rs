use std::path::PathBuf;

use self::create_config::create_config_interactive;
use crate::cli::Args;
use crate::config::Config;
use crate::deployment::steps::assemble_report::REPORT_PATH;
use crate::deployment::Cmd;
use crate::report::Report;
use crate::serde_utils;

mod create_config;
mod utils;

#[derive(Clone, Debug, derive_more::Display)]
enum MainMenu {
    #[display(fmt = "Proceed")]
    Proceed,
    #[display(fmt = "Forget deployed portal (redeploys on next run)")]
    ForgetPortal,
}

pub async fn run_interactive_session(cmd: Args) -> eyre::Result<Cmd> {
    let deployment_name = if let Some(name) = cmd.deployment_name.as_ref() {
        println!("Currently working on deployment: {}", name);
        name.clone()
    } else {
        inquire::Text::new("Deployment name:").prompt()?
    };

    let private_key = if let Some(private_key) = cmd.private_key.as_ref() {
        println!("Using private key: {private_key}");
        private_key.clone()
    } else {
        let private_key = inquire::Text::new("Private key:").prompt()?;
        private_key.parse()?
    };

    let rpc_url = if let Some(rpc_url) = cmd.rpc_url.as_ref() {
        println!("Using RPC: {rpc_url}");
        rpc_url.clone()
    } else {
        let rpc_url = inquire::Text::new("Rpc Url:").prompt()?;
        rpc_url.parse()?
    };

    let config_path = if let Some(config) = cmd.config.as_ref() {
        println!("Using config at: {}", config.display());
        config.clone()
    } else {
        let config_path =
            inquire::Text::new("Path to config (leave empty to create):")
                .prompt()?;

        if config_path.trim().is_empty() {
            create_config_interactive().await?
        } else {
            PathBuf::from(config_path)
        }
    };

    loop {
        let config: Config =
            serde_utils::read_deserialize(&config_path).await?;

        let deployment_dir = PathBuf::from(&deployment_name);

        let report_path = deployment_dir.join(REPORT_PATH);

        if !report_path.exists() {
            println!("Deployment name: {deployment_name}");
            print_deployment_info(&config);

            let proceed = inquire::Confirm::new(
                "No report found, do you want to proceed with this deployment?",
            )
            .prompt()?;

            if !proceed {
                std::process::exit(0);
            }

            return Ok(Cmd::new(
                config_path,
                deployment_name,
                private_key,
                rpc_url,
            ));
        }

        let mut report: Report =
            serde_utils::read_deserialize(&report_path).await?;

        println!("Deployment name: {deployment_name}");
        print_deployment_diff(&config, &report);

        match inquire::Select::new(
            "Menu:",
            vec![MainMenu::Proceed, MainMenu::ForgetPortal],
        )
        .prompt_skippable()?
        {
            Some(MainMenu::Proceed) => break,
            Some(MainMenu::ForgetPortal) => {
                report.invalidate_portal();
                serde_utils::write_serialize(&report_path, &report).await?;
            }
            None => std::process::exit(0),
        }
    }

    Ok(Cmd::new(config_path, deployment_name, private_key, rpc_url))
}

fn print_deployment_info(config: &Config) {
    println!("Portal:");
    println!("  Contract: {}", config.portal.name);
    println!("  Artifact: {}", config.portal.artifact.display());
    println!("  Confirmations: {}", config.misc.confirmations);
}

fn print_deployment_diff(config: &Config, report: &Report) {
    println!("Portal:");
    println!("  Contract: {}", config.portal.name);

    if let Some(portal) = report.portal.as_ref() {
        println!("  Deployed to: {:?}", portal.portal_deployment.address);
    } else {
        println!("  Deployed to: (undeployed)");
    }
}
