//! CLI command definitions and dispatch.

pub mod migrate;
pub mod serve;
pub mod user;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use directory_core::config::AppConfig;
use directory_core::error::AppError;
use directory_database::connect_user_store;
use directory_service::{UserService, UserValidator};
use directory_storage::build_media_store;

/// Environment variable selecting the configuration overlay.
const ENV_VAR: &str = "DIRECTORY_ENV";

/// User directory administration
#[derive(Debug, Parser)]
#[command(name = "directory-cli", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding `default.toml` and environment overlays
    #[arg(short, long, default_value = "config")]
    pub config_dir: String,

    /// Configuration overlay to apply (defaults to $DIRECTORY_ENV, then "development")
    #[arg(short, long)]
    pub env: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Apply pending database migrations
    Migrate,
    /// Inspect and manage user records
    Users(user::UserArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = self.load_config()?;
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate => migrate::execute(&config).await,
            Commands::Users(args) => user::execute(args, &config, self.format).await,
        }
    }

    fn load_config(&self) -> Result<AppConfig, AppError> {
        let env = self
            .env
            .clone()
            .or_else(|| std::env::var(ENV_VAR).ok())
            .unwrap_or_else(|| "development".to_string());
        AppConfig::load(&self.config_dir, &env)
    }
}

/// Helper: connect the configured stores and build the user service
pub async fn build_user_service(config: &AppConfig) -> Result<UserService, AppError> {
    let store = connect_user_store(&config.database).await?;
    let media = build_media_store(&config.media).await?;
    let validator = UserValidator::new(&config.users, &config.media);
    Ok(UserService::new(store, media, validator))
}
