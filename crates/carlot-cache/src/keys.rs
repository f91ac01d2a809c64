//! Cache key builders.
//!
//! Backends may add their own namespace prefix on top of these.

use carlot_core::types::CarId;

/// Cache key for a car by id.
pub fn car_by_id(id: CarId) -> String {
    format!("car:{id}")
}
