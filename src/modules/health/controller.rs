use axum::Json;
use chrono::{SecondsFormat, Utc};

use super::model::HealthResponse;

pub const API_VERSION: &str = "1.0.0";

/// Liveness probe
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        version: API_VERSION.to_string(),
    })
}
