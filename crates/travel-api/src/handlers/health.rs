//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use travel_service::dto::{HealthResponse, ReadinessResponse};

use crate::state::AppState;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check with dependency health
///
/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let ctx = state.service_context();

    let db_healthy = match ctx.pool() {
        Some(pool) => travel_db::ping(pool).await,
        None => false,
    };

    let redis_healthy = match ctx.redis_pool() {
        Some(redis) => redis.health_check().await.is_ok(),
        None => false,
    };

    let storage_healthy = tokio::fs::metadata(state.storage_root())
        .await
        .is_ok_and(|meta| meta.is_dir());

    let response = ReadinessResponse::ready(db_healthy, redis_healthy, storage_healthy);
    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
