//! Backend selection at process start.

use std::sync::Arc;

use tracing::info;

use carlot_core::config::{DatabaseConfig, StoreBackend};
use carlot_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::{MemoryCarStore, MemoryUserStore};
use crate::migration::run_migrations;
use crate::repositories::{CarRepository, UserRepository};
use crate::store::{CarStore, UserStore};

/// The configured durable store, as trait objects.
#[derive(Debug, Clone)]
pub struct Stores {
    pub cars: Arc<dyn CarStore>,
    pub users: Arc<dyn UserStore>,
    pool: Option<DatabasePool>,
}

impl Stores {
    /// Connect to the configured backend. PostgreSQL migrations run here.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.backend {
            StoreBackend::Postgres => {
                let pool = DatabasePool::connect(config).await?;
                run_migrations(pool.pool()).await?;
                Ok(Self {
                    cars: Arc::new(CarRepository::new(pool.pool().clone())),
                    users: Arc::new(UserRepository::new(pool.pool().clone())),
                    pool: Some(pool),
                })
            }
            StoreBackend::Memory => {
                info!("Using in-memory store; data is not persisted");
                Ok(Self::in_memory())
            }
        }
    }

    pub fn in_memory() -> Self {
        Self {
            cars: Arc::new(MemoryCarStore::new()),
            users: Arc::new(MemoryUserStore::new()),
            pool: None,
        }
    }

    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
