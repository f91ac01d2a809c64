//! Bearer-token extractors backed by the authorization gate.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use carlot_auth::{Access, Claims};
use carlot_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Any holder of a valid access token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

/// A valid access token with the admin claim.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Claims);

fn authorize(parts: &Parts, state: &AppState, access: Access) -> Result<Claims, ApiError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    state
        .gate
        .check(access, header)?
        .ok_or_else(|| AppError::internal("Gate returned no claims for a protected route").into())
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authorize(parts, state, Access::Authenticated).map(Self)
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authorize(parts, state, Access::Admin).map(Self)
    }
}
