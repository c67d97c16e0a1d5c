//! Router configuration for the HTTP API.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::ServerState;

/// Create the application router with all routes and middleware.
pub fn create_router(state: ServerState) -> Router {
    // Read-only GET API; any origin may embed the charts.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/layout", get(handlers::get_layout))
        .route("/pie", get(handlers::get_pie))
        .route("/scatter", get(handlers::get_scatter))
        .route("/range-label", get(handlers::get_range_label));

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .nest("/api", api)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
