use crate::cli::{commands::Commands, handlers};
use crate::error::{CliError, Result};
use clap::Parser;
use clap_verbosity_flag::{LevelFilter, OffLevel, Verbosity};
use dropstab_sdk::{ClientBuilder, DropstabApi, DropstabConfig, LogLevel};
use std::path::PathBuf;

/// Dropstab CLI - portfolio tracking from the terminal
#[derive(Parser, Debug)]
#[command(
    name = "dropstab",
    version,
    about = "Dropstab CLI - portfolio tracking from the terminal",
    long_about = "Command-line front end for the Dropstab portfolio API.

Credentials are read from --email/--password, the EMAIL/PASSWORD environment
variables, or a .env file in the working directory.

EXAMPLES:
  dropstab login
  dropstab portfolios list
  dropstab portfolios show 1402496
  dropstab portfolios create --name \"My Portfolio\" --color BLUE --include-in-total"
)]
pub struct Args {
    /// Configuration file path (defaults to ./dropstab.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Account email
    #[arg(long, env = "EMAIL", global = true)]
    pub email: Option<String>,

    /// Account password
    #[arg(long, env = "PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    #[command(flatten)]
    pub verbosity: Verbosity<OffLevel>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Args {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        let api = self.build_api()?;

        let email = self
            .email
            .as_deref()
            .ok_or(CliError::MissingCredential("email", "EMAIL"))?;
        let password = self
            .password
            .as_deref()
            .ok_or(CliError::MissingCredential("password", "PASSWORD"))?;
        api.login(email, password).await?;

        match self.command {
            Commands::Login => handlers::handle_login(),
            Commands::Portfolios { action } => handlers::handle_portfolios(&api, action).await,
        }
    }

    /// Build the SDK facade from config file, environment and flags
    pub fn build_api(&self) -> Result<DropstabApi> {
        let config = DropstabConfig::load(self.config.as_deref())?;

        let mut builder = ClientBuilder::from_config(&config);
        if let Some(base_url) = &self.base_url {
            builder = builder.base_url(base_url.clone());
        }
        if self.verbosity.log_level_filter() >= LevelFilter::Debug {
            builder = builder.log_levels([
                LogLevel::Info,
                LogLevel::Error,
                LogLevel::Debug,
                LogLevel::Warn,
            ]);
        }

        Ok(builder.build()?)
    }
}
