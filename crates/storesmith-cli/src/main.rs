//! Storesmith CLI - App Store asset helper
//!
//! Generates App Store icon sets locally or serves the asset web API.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::{Cli, Commands};

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "storesmith=debug,storesmith_core=debug,storesmith_web=debug"
    } else {
        "storesmith=info,storesmith_web=debug"
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve(args) => commands::serve::execute(args).await,
        Commands::Icons(args) => commands::icons::execute(args).await,
    }
}
