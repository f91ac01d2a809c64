//! Identity handlers: signup, admin signup, login, refresh.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::info;

use crate::dto::request::{CredentialsRequest, RefreshRequest, validate};
use crate::dto::response::{ApiResponse, TokenResponse};
use crate::error::ApiError;
use crate::extractors::AdminUser;
use crate::state::AppState;

type TokenResult = Result<Json<ApiResponse<TokenResponse>>, ApiError>;

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TokenResponse>>), ApiError> {
    validate(&req)?;
    let tokens = state.sessions.sign_up(&req.login, &req.password, false).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(tokens.into()))))
}

/// POST /api/auth/signup/admin
pub async fn signup_admin(
    State(state): State<AppState>,
    AdminUser(caller): AdminUser,
    Json(req): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TokenResponse>>), ApiError> {
    validate(&req)?;
    let tokens = state.sessions.sign_up(&req.login, &req.password, true).await?;
    info!(created_by = %caller.sub, "Admin account created");
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(tokens.into()))))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> TokenResult {
    let tokens = state.sessions.login(&req.login, &req.password).await?;
    Ok(Json(ApiResponse::ok(tokens.into())))
}

/// POST /api/auth/refresh
pub async fn refresh(State(state): State<AppState>, Json(req): Json<RefreshRequest>) -> TokenResult {
    validate(&req)?;
    let tokens = state
        .sessions
        .refresh(&req.access_token, &req.refresh_token)
        .await?;
    Ok(Json(ApiResponse::ok(tokens.into())))
}
