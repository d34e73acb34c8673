use crate::app_state::AppState;
use crate::{api, health};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Admin dashboard endpoints
        .route("/api/v1/admin/metrics", get(api::admin::metrics::get_metrics))
        .route(
            "/api/v1/admin/users/search",
            post(api::admin::users::search_users),
        )
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
