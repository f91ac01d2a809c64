//! Car entity model.

use carlot_core::types::CarId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Earliest accepted production year.
pub const PRODUCTION_YEAR_MIN: i32 = 1950;
/// Latest accepted production year.
pub const PRODUCTION_YEAR_MAX: i32 = 2023;

/// A car in the inventory.
///
/// The durable store is the source of truth; the cache holds a JSON
/// projection of this struct keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Car {
    pub id: CarId,
    /// Manufacturer, never empty.
    pub brand: String,
    pub production_year: i32,
    pub is_running: bool,
}

impl Car {
    pub fn new(brand: impl Into<String>, production_year: i32, is_running: bool) -> Self {
        Self {
            id: CarId::new(),
            brand: brand.into(),
            production_year,
            is_running,
        }
    }

    /// Whether `production_year` lies in the accepted range.
    pub fn has_valid_year(&self) -> bool {
        (PRODUCTION_YEAR_MIN..=PRODUCTION_YEAR_MAX).contains(&self.production_year)
    }
}
