//! Matchday CLI
//!
//! Command-line interface for the Matchday prediction service: submit
//! simulation runs, watch them to completion, and browse the results.

mod commands;
mod config;
mod notify;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "matchday")]
#[command(about = "Premier League prediction service CLI", long_about = None)]
struct Cli {
    /// Prediction service URL
    #[arg(long, env = "MATCHDAY_API_URL", default_value = "http://localhost:8000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "matchday_sync=warn,matchday_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
    };

    handle_command(cli.command, &config).await
}
