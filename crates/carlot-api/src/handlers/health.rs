//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::warn;

use carlot_core::traits::CacheProvider;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

fn describe(result: Result<bool, carlot_core::AppError>, component: &str) -> (bool, String) {
    match result {
        Ok(true) => (true, "connected".to_string()),
        Ok(false) => (false, "degraded".to_string()),
        Err(e) => {
            warn!(component, error = %e, "Health check failed");
            (false, "unreachable".to_string())
        }
    }
}

/// GET /api/health
pub async fn health(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<HealthResponse>>) {
    let (db_ok, database) = describe(state.stores.health_check().await, "database");
    let (cache_ok, cache) = describe(state.cache.health_check().await, "cache");

    let healthy = db_ok && cache_ok;
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ApiResponse::ok(HealthResponse {
            status: if healthy { "ok" } else { "degraded" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database,
            cache,
        })),
    )
}
