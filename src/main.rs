//! Carlot server: car inventory over REST and RPC.
//!
//! Loads configuration, installs tracing and serves until Ctrl+C or SIGTERM.

use tracing_subscriber::{EnvFilter, fmt};

use carlot_core::config::AppConfig;
use carlot_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!("Starting Carlot v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = carlot_api::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// `CARLOT_CONFIG` names an extra file layered over `config/default`.
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path = std::env::var("CARLOT_CONFIG").ok();
    AppConfig::load(config_path.as_deref())
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}
