//! Admin account bootstrap.
//!
//! Admin signup over the API needs an admin token, so the first admin is
//! created here against the configured store.

use clap::{Args, Subcommand};

use carlot_api::AppState;
use carlot_core::config::{AppConfig, StoreBackend};
use carlot_core::error::AppError;

use crate::output;

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Create a new admin account
    Create {
        /// Login (4-20 characters)
        #[arg(short, long)]
        login: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
}

/// Execute admin commands
pub async fn execute(args: &AdminArgs, config: AppConfig) -> Result<(), AppError> {
    match &args.command {
        AdminCommand::Create { login, password } => {
            let login = match login {
                Some(l) => l.clone(),
                None => dialoguer::Input::new()
                    .with_prompt("Admin login")
                    .interact_text()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Admin password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            check_credentials(&login, &password)?;

            if config.database.backend == StoreBackend::Memory {
                output::print_warning("Memory store: the account is discarded on exit.");
            }

            let state = AppState::from_config(config).await?;
            state.sessions.sign_up(&login, &password, true).await?;
            state.stores.close().await;

            output::print_success(&format!("Admin '{login}' created."));
        }
    }

    Ok(())
}

fn check_credentials(login: &str, password: &str) -> Result<(), AppError> {
    let len = login.chars().count();
    if !(4..=20).contains(&len) {
        return Err(AppError::validation("Login must be 4-20 characters"));
    }
    if password.chars().count() < 8 {
        return Err(AppError::validation("Password must be at least 8 characters"));
    }
    Ok(())
}
