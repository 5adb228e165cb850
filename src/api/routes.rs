//! API Route Configuration

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::handlers::{self, AppState};
use super::middleware::logging_middleware;

/// Create the API router with all routes and middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let request_timeout = state.request_timeout;

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/zips", get(handlers::list_zips))
        .route("/amenities", get(handlers::list_amenities))
        .route("/analyze", post(handlers::analyze))
        .with_state(state)
        // Middleware (order matters - bottom runs first)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}
