//! Database migration management commands.

use clap::{Args, Subcommand};

use carlot_core::config::{AppConfig, StoreBackend};
use carlot_core::error::AppError;
use carlot_database::DatabasePool;

use crate::output;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
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
pub async fn execute(args: &MigrateArgs, config: AppConfig) -> Result<(), AppError> {
    match &args.command {
        MigrateCommand::Run => {
            if config.database.backend != StoreBackend::Postgres {
                output::print_warning("The memory backend has no schema to migrate.");
                return Ok(());
            }

            println!("Running database migrations...");
            let pool = DatabasePool::connect(&config.database).await?;
            carlot_database::migration::run_migrations(pool.pool()).await?;
            pool.close().await;
            output::print_success("All migrations applied successfully.");
        }
    }

    Ok(())
}
