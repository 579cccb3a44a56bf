//! CLI command definitions and handlers.

use clap::{Parser, Subcommand};

pub mod icons;
pub mod serve;

/// Storesmith - App Store Asset Helper
#[derive(Parser)]
#[command(name = "storesmith")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the asset generation web server
    Serve(serve::ServeArgs),

    /// Generate an icon set archive from a local image
    Icons(icons::IconsArgs),
}
