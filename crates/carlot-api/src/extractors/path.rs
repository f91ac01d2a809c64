//! Typed path parameter helpers.

use carlot_core::error::AppError;
use carlot_core::types::CarId;

/// Parses a car id from a path segment.
pub fn parse_car_id(s: &str) -> Result<CarId, AppError> {
    s.parse()
        .map_err(|_| AppError::validation(format!("Invalid car id: {s}")))
}
