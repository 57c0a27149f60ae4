use serde::{Deserialize, Serialize};

pub const ROOT_MESSAGE: &str = "Hello from FastAPI backend!";
pub const HEALTHY: &str = "healthy";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RootResponse {
    pub message: String
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String
}

impl RootResponse {

    pub fn hello() -> Self {

        RootResponse { message: ROOT_MESSAGE.to_string() }

    }

}

impl HealthResponse {

    pub fn healthy() -> Self {

        HealthResponse { status: HEALTHY.to_string() }

    }

}
