//! Method-dispatch RPC binding.
//!
//! Every call is a `POST /rpc` with `{"method": "CarService/GetCar", "params": {...}}`.
//! The reply is always HTTP 200 and carries either `result` or `error`, with
//! status codes named the way gRPC names them. The method is resolved and
//! authorized before its params are looked at.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use carlot_auth::Operation;
use carlot_core::error::{AppError, ErrorKind};
use carlot_core::result::AppResult;
use carlot_core::types::CarId;

use crate::dto::request::{
    CarIdParams, CarRequest, CredentialsRequest, RefreshRequest, UpdateCarParams, validate,
};
use crate::dto::response::TokenResponse;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcError {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl From<AppResult<Value>> for RpcResponse {
    fn from(outcome: AppResult<Value>) -> Self {
        match outcome {
            Ok(result) => Self {
                result: Some(result),
                error: None,
            },
            Err(err) => {
                if err.kind == ErrorKind::Internal || err.kind == ErrorKind::Serialization {
                    tracing::error!(kind = %err.kind, error = %err.message, "RPC call failed");
                }
                Self {
                    result: None,
                    error: Some(RpcError {
                        code: rpc_code(err.kind).to_string(),
                        message: err.message,
                    }),
                }
            }
        }
    }
}

/// gRPC status name for a domain error.
pub fn rpc_code(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Validation => "INVALID_ARGUMENT",
        ErrorKind::InvalidCredentials
        | ErrorKind::TokenInvalid
        | ErrorKind::TokenExpired
        | ErrorKind::ClaimMismatch
        | ErrorKind::RefreshTokenRevoked
        | ErrorKind::Unauthenticated => "UNAUTHENTICATED",
        ErrorKind::Forbidden => "PERMISSION_DENIED",
        ErrorKind::NotFound => "NOT_FOUND",
        ErrorKind::LoginTaken => "ALREADY_EXISTS",
        ErrorKind::StoreUnavailable => "UNAVAILABLE",
        ErrorKind::Serialization | ErrorKind::Configuration | ErrorKind::Internal => "INTERNAL",
    }
}

/// POST /rpc
pub async fn rpc(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<RpcRequest>,
) -> Json<RpcResponse> {
    let header = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    let outcome = call(&state, &req.method, header, req.params).await;
    Json(outcome.into())
}

async fn call(
    state: &AppState,
    method: &str,
    authorization: Option<&str>,
    params: Value,
) -> AppResult<Value> {
    let operation: Operation = method.parse()?;
    let claims = state.gate.authorize(operation, authorization)?;
    debug!(
        method = operation.method(),
        caller = ?claims.as_ref().map(|c| c.sub),
        "RPC dispatch"
    );
    dispatch(state, operation, params).await
}

async fn dispatch(state: &AppState, operation: Operation, params: Value) -> AppResult<Value> {
    match operation {
        Operation::SignUp | Operation::SignUpAdmin => {
            let req: CredentialsRequest = parse(params)?;
            validate(&req)?;
            let admin = operation == Operation::SignUpAdmin;
            let tokens = state.sessions.sign_up(&req.login, &req.password, admin).await?;
            to_value(TokenResponse::from(tokens))
        }
        Operation::Login => {
            let req: CredentialsRequest = parse(params)?;
            let tokens = state.sessions.login(&req.login, &req.password).await?;
            to_value(TokenResponse::from(tokens))
        }
        Operation::Refresh => {
            let req: RefreshRequest = parse(params)?;
            validate(&req)?;
            let tokens = state
                .sessions
                .refresh(&req.access_token, &req.refresh_token)
                .await?;
            to_value(TokenResponse::from(tokens))
        }
        Operation::CreateCar => {
            let req: CarRequest = parse(params)?;
            validate(&req)?;
            let car = req.into_car(CarId::new());
            state.cars.create(&car).await?;
            to_value(car)
        }
        Operation::GetCar => {
            let req: CarIdParams = parse(params)?;
            to_value(state.cars.get(req.id).await?)
        }
        Operation::UpdateCar => {
            let req: UpdateCarParams = parse(params)?;
            validate(&req)?;
            let car = req.car.into_car(req.id);
            state.cars.update(&car).await?;
            to_value(car)
        }
        Operation::DeleteCar => {
            let req: CarIdParams = parse(params)?;
            state.cars.delete(req.id).await?;
            to_value(req)
        }
        Operation::GetAllCars => to_value(state.cars.get_all().await?),
    }
}

fn parse<T: DeserializeOwned>(params: Value) -> AppResult<T> {
    serde_json::from_value(params)
        .map_err(|e| AppError::validation(format!("Invalid params: {e}")))
}

fn to_value<T: Serialize>(value: T) -> AppResult<Value> {
    Ok(serde_json::to_value(value)?)
}
