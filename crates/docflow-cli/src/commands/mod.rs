//! CLI command definitions and dispatch.

pub mod migrate;
pub mod user;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::{self, OutputFormat};
use docflow_core::config::AppConfig;
use docflow_core::error::AppError;
use docflow_core::traits::RecordStore;

/// DocFlow administration
#[derive(Debug, Parser)]
#[command(name = "docflow", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (`config/{env}.toml` overlay)
    #[arg(short, long, env = "DOCFLOW_ENV", default_value = "development")]
    pub env: String,

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
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// User account management
    User(user::UserArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load(&self.env)?;
        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::User(args) => user::execute(args, &config, self.format).await,
        }
    }
}

/// Open the configured record store.
pub async fn open_store(config: &AppConfig) -> Result<Arc<dyn RecordStore>, AppError> {
    if config.database.provider == "memory" {
        output::print_warning("The memory store is discarded when this command exits.");
    }
    docflow_database::open_store(&config.database).await
}
