use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(super::handlers::page::index))

        // API endpoints
        .route("/api/review", post(super::handlers::review::review))

        // Health check
        .route("/health", get(super::handlers::health::health_check))

        .with_state(state)
}
