pub mod config;
pub mod cors;
pub mod handlers;
pub mod logger;
pub mod models;

use axum::routing::{get, Router};
use tower_http::trace::TraceLayer;

/// Builds the application router: the two routes behind CORS and request tracing.
pub fn app() -> Router {

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .layer(cors::cors_layer())
        .layer(TraceLayer::new_for_http())

}
