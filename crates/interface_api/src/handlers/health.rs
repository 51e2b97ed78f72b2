//! Health check handlers

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;

use core_kernel::{HealthCheckResult, HealthCheckable};

use crate::dto::rating::HealthResponse;
use crate::AppState;

const SERVICE_NAME: &str = "QuoteMaster API";

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

/// Readiness check (includes the quote store)
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthCheckResult>) {
    let result = state.records.port().health_check().await;
    let status = if result.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(result))
}
