use clap::Parser;
use indicatif::ProgressStyle;
use interactive::run_interactive_session;
use tracing_error::ErrorLayer;
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::cli::Args;

pub mod artifact_utils;
pub mod ethers_utils;
pub mod serde_utils;

mod cli;
mod config;
mod report;
mod types;

mod deployment;

mod interactive;

async fn start() -> eyre::Result<()> {
    let initial_args = Args::parse();
    let cmd = run_interactive_session(initial_args).await?;

    deployment::run_deployment(cmd).await
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    dotenv::dotenv().ok();

    let indicatif_layer = IndicatifLayer::new().with_progress_style(
        ProgressStyle::with_template(
            "{span_child_prefix}{spinner} {span_name} [{elapsed}]",
        )?,
    );

    let filter = EnvFilter::from_default_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(indicatif_layer.get_stderr_writer())
                .with_filter(filter),
        )
        .with(indicatif_layer)
        .with(ErrorLayer::default())
        .init();

    match start().await {
        Ok(()) => Ok(()),
        Err(err) => {
            let report = eyre::ErrReport::from(err);
            tracing::error!("{:?}", report);
            std::process::exit(1)
        }
    }
}
