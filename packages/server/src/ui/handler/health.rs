//! Health probe endpoints.

use axum::Json;

use crate::infrastructure::dto::http::HealthDto;

/// Health check endpoint (`/health`, `/health/startup`, `/health/liveness`, `/health/readiness`)
pub async fn health_check() -> Json<HealthDto> {
    Json(HealthDto::ok())
}
