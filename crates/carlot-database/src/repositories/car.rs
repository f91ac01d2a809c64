//! Car repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use carlot_core::error::AppError;
use carlot_core::result::AppResult;
use carlot_core::types::CarId;
use carlot_entity::car::Car;

use super::{is_unique_violation, unavailable};
use crate::store::CarStore;

#[derive(Debug, Clone)]
pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarStore for CarRepository {
    async fn create(&self, car: &Car) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO cars (id, brand, production_year, is_running) VALUES ($1, $2, $3, $4)",
        )
        .bind(car.id)
        .bind(&car.brand)
        .bind(car.production_year)
        .bind(car.is_running)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::validation(format!("Car {} already exists", car.id))
            } else {
                AppError::store_unavailable("Failed to create car", e)
            }
        })?;
        Ok(())
    }

    async fn get(&self, id: CarId) -> AppResult<Option<Car>> {
        sqlx::query_as::<_, Car>(
            "SELECT id, brand, production_year, is_running FROM cars WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(unavailable("Failed to find car by id"))
    }

    async fn update(&self, car: &Car) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE cars SET brand = $1, production_year = $2, is_running = $3 WHERE id = $4",
        )
        .bind(&car.brand)
        .bind(car.production_year)
        .bind(car.is_running)
        .bind(car.id)
        .execute(&self.pool)
        .await
        .map_err(unavailable("Failed to update car"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: CarId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(unavailable("Failed to delete car"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn get_all(&self) -> AppResult<Vec<Car>> {
        sqlx::query_as::<_, Car>(
            "SELECT id, brand, production_year, is_running FROM cars ORDER BY brand, production_year",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(unavailable("Failed to list cars"))
    }
}
