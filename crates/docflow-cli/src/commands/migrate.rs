//! Database migration management commands.

use clap::{Args, Subcommand};

use crate::output;
use docflow_core::config::AppConfig;
use docflow_core::error::AppError;
use docflow_core::traits::RecordStore;
use docflow_database::PgRecordStore;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config: &AppConfig) -> Result<(), AppError> {
    if config.database.provider != "postgres" {
        return Err(AppError::configuration(format!(
            "Migrations only apply to the postgres provider (configured: '{}')",
            config.database.provider
        )));
    }

    match &args.command {
        MigrateCommand::Run => {
            println!("Running database migrations...");
            let store = PgRecordStore::connect(&config.database).await?;
            store.close().await;
            output::print_success("All migrations applied successfully.");
        }
    }

    Ok(())
}
