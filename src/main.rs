// main.rs
mod cli;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Args, Commands};
use vpet::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::load(args.config).context("Failed to load configuration")?;

    match args.command {
        Commands::Run => cli::handle_run(config).await,
        Commands::Simulate { minutes, step, actions, json } => {
            cli::handle_simulate(config, minutes, step, actions, json)
        }
        Commands::Status { json } => cli::handle_status(config, json),
    }
}
