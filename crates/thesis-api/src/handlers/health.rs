//! Health check handlers

use axum::{extract::State, http::StatusCode, Json};
use thesis_service::HealthResponse;

use crate::state::AppState;

/// Liveness and readiness check with database connectivity
///
/// GET /health
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_healthy = state
        .service_context()
        .pool()
        .acquire()
        .await
        .map(|_| true)
        .unwrap_or(false);

    let response = HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        database: if db_healthy { "up" } else { "down" },
    };
    let status = if db_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
