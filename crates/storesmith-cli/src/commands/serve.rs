//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use storesmith_core::icons::IconSetOptions;
use storesmith_core::openai::OpenAiClient;
use storesmith_web::AppState;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "3030")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Also write a Contents.json for the macOS folder in generated
    /// archives
    #[arg(long)]
    pub macos_manifest: bool,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let openai = OpenAiClient::from_env()?;
    let state = AppState::new(openai).with_icon_options(IconSetOptions {
        write_macos_manifest: args.macos_manifest,
    });

    println!();
    println!("  {} {}", "Storesmith".cyan().bold(), "Web Server".bold());
    println!();
    println!("  {}        http://{}:{}/api", "API".green(), args.host, args.port);
    println!(
        "  {}      POST http://{}:{}/api/generate-icons",
        "Icons".green(),
        args.host,
        args.port
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    storesmith_web::run_server(state, &args.host, args.port).await?;

    Ok(())
}
