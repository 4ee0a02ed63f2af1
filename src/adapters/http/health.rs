//! GET /api/ - Service banner.

use axum::Json;
use serde::{Deserialize, Serialize};

pub const SERVICE_MESSAGE: &str = "Law of One Profile Generator API";
pub const SERVICE_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
    pub version: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: SERVICE_MESSAGE.to_string(),
        version: SERVICE_VERSION.to_string(),
    })
}
