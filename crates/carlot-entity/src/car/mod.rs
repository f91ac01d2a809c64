//! Inventory entities.

pub mod model;

pub use model::{Car, PRODUCTION_YEAR_MAX, PRODUCTION_YEAR_MIN};
