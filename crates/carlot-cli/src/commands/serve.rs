//! Start the Carlot server.

use clap::{Args, ValueEnum};

use carlot_core::config::{AppConfig, CacheBackend, StoreBackend};
use carlot_core::error::AppError;

/// Backend selection that overrides both store and cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// PostgreSQL store with Redis cache
    Postgres,
    /// Process-local store and cache
    Memory,
}

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the configured backends
    #[arg(long, value_enum)]
    pub backend: Option<Backend>,
}

impl ServeArgs {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(ref host) = self.host {
            config.server.host = host.clone();
        }
        match self.backend {
            Some(Backend::Postgres) => {
                config.database.backend = StoreBackend::Postgres;
                config.cache.backend = CacheBackend::Redis;
            }
            Some(Backend::Memory) => {
                config.database.backend = StoreBackend::Memory;
                config.cache.backend = CacheBackend::Memory;
            }
            None => {}
        }
    }
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    args.apply(&mut config);
    config.validate()?;

    println!("Starting Carlot server...");
    crate::output::print_kv("Host", &config.server.host);
    crate::output::print_kv("Port", &config.server.port.to_string());
    crate::output::print_kv("Store", &format!("{:?}", config.database.backend));
    crate::output::print_kv("Cache", &format!("{:?}", config.cache.backend));

    carlot_api::run_server(config).await
}
