//! Route definitions.
//!
//! REST routes are mounted under `/api`; the RPC binding lives at `/rpc`.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the router and thread `AppState` through every route.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(car_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .route("/rpc", post(handlers::rpc::rpc))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Auth endpoints: signup, admin signup, login, refresh
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/signup/admin", post(handlers::auth::signup_admin))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
}

/// Car inventory
fn car_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/cars",
            get(handlers::car::list_cars).post(handlers::car::create_car),
        )
        .route(
            "/cars/{id}",
            get(handlers::car::get_car)
                .put(handlers::car::update_car)
                .delete(handlers::car::delete_car),
        )
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
