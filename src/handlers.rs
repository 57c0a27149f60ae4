use axum::Json;
use tracing::info;
use crate::models::{HealthResponse, RootResponse};

pub async fn root() -> Json<RootResponse> {

    info!("Root endpoint called");

    Json(RootResponse::hello())

}

pub async fn health_check() -> Json<HealthResponse> {

    info!("Health check endpoint called");

    Json(HealthResponse::healthy())

}
