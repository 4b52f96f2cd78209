//! Main entry point for the Dropstab CLI

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use dropstab_cli::{cli::Args, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // EMAIL / PASSWORD may come from a local .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();

    color_eyre::config::HookBuilder::default()
        .display_location_section(false)
        .display_env_section(false)
        .install()?;

    logging::init_cli_logging(&args.verbosity, "dropstab_cli=info,dropstab_sdk=info")
        .map_err(|e| eyre!("Failed to initialize logging: {}", e))?;

    Ok(args.run().await?)
}
