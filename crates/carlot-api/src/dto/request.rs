//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use carlot_core::error::AppError;
use carlot_core::types::CarId;
use carlot_entity::car::Car;

/// Signup and login body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(length(min = 4, max = 20, message = "Login must be 4-20 characters"))]
    pub login: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Both halves of the most recently issued pair.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshRequest {
    #[validate(length(min = 1, message = "Access token is required"))]
    pub access_token: String,
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

/// Car fields accepted on create and update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CarRequest {
    #[validate(length(min = 1, message = "Brand is required"))]
    pub brand: String,
    #[validate(range(min = 1950, max = 2023, message = "Production year must be 1950-2023"))]
    pub production_year: i32,
    pub is_running: bool,
}

impl CarRequest {
    pub fn into_car(self, id: CarId) -> Car {
        Car {
            id,
            brand: self.brand,
            production_year: self.production_year,
            is_running: self.is_running,
        }
    }
}

/// RPC `UpdateCar` carries the id in the body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCarParams {
    pub id: CarId,
    #[serde(flatten)]
    #[validate(nested)]
    pub car: CarRequest,
}

/// RPC `GetCar` and `DeleteCar`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarIdParams {
    pub id: CarId,
}

/// Run `validator` rules and fold the failures into one message.
pub fn validate<T: Validate>(req: &T) -> Result<(), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid request: {e}")))
}
