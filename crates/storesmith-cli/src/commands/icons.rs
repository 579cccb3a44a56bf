//! Local icon set generation command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use storesmith_core::icons::{build_icon_set, IconSetOptions};

use crate::output;

#[derive(Args)]
pub struct IconsArgs {
    /// Path to the source image (PNG or JPEG, at least 512x512)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Platforms to generate for
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_value = "iphone,ipad,watchos,macos"
    )]
    pub platforms: Vec<String>,

    /// Output path for the zip archive (defaults to the suggested name
    /// in the current directory)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also write a Contents.json for the macOS folder
    #[arg(long)]
    pub macos_manifest: bool,
}

pub async fn execute(args: IconsArgs) -> Result<()> {
    let image_bytes = std::fs::read(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let options = IconSetOptions {
        write_macos_manifest: args.macos_manifest,
    };

    let archive = build_icon_set(&image_bytes, &args.platforms, &options).await?;

    let output_path = args
        .output
        .unwrap_or_else(|| PathBuf::from(&archive.filename));
    std::fs::write(&output_path, &archive.bytes)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    output::print_archive_written(&output_path, archive.len(), &args.platforms);

    Ok(())
}
