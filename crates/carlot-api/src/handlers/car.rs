//! Inventory handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use carlot_core::types::CarId;
use carlot_entity::car::Car;

use crate::dto::request::{CarRequest, validate};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AdminUser, AuthUser, parse_car_id};
use crate::state::AppState;

/// GET /api/cars
pub async fn list_cars(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Car>>>, ApiError> {
    let cars = state.cars.get_all().await?;
    Ok(Json(ApiResponse::ok(cars)))
}

/// POST /api/cars
pub async fn create_car(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<CarRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Car>>), ApiError> {
    validate(&req)?;
    let car = req.into_car(CarId::new());
    state.cars.create(&car).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(car))))
}

/// GET /api/cars/{id}
pub async fn get_car(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Car>>, ApiError> {
    let car = state.cars.get(parse_car_id(&id)?).await?;
    Ok(Json(ApiResponse::ok(car)))
}

/// PUT /api/cars/{id}
pub async fn update_car(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<CarRequest>,
) -> Result<Json<ApiResponse<Car>>, ApiError> {
    let id = parse_car_id(&id)?;
    validate(&req)?;
    let car = req.into_car(id);
    state.cars.update(&car).await?;
    Ok(Json(ApiResponse::ok(car)))
}

/// DELETE /api/cars/{id}
pub async fn delete_car(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let id = parse_car_id(&id)?;
    state.cars.delete(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("Car {id} deleted"),
    })))
}
