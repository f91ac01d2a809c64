//! CLI command definitions and dispatch.

pub mod admin;
pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use carlot_core::config::AppConfig;
use carlot_core::error::AppError;

/// Carlot: car inventory service
#[derive(Debug, Parser)]
#[command(name = "carlot", version, about, long_about = None)]
pub struct Cli {
    /// Path to a configuration file layered over config/default
    #[arg(short, long, env = "CARLOT_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP and RPC server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Admin account management
    Admin(admin::AdminArgs),
}

impl Cli {
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = load_config(self.config.as_deref())?;
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate(args) => migrate::execute(args, config).await,
            Commands::Admin(args) => admin::execute(args, config).await,
        }
    }
}

fn load_config(path: Option<&str>) -> Result<AppConfig, AppError> {
    AppConfig::load(path).map_err(|e| AppError::configuration(format!("Failed to load config: {e}")))
}
