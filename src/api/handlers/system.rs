use axum::{extract::State, Json};
use sqlx::PgPool;

use crate::api::error::{ApiError, ApiResult};
use crate::db::connection;
use crate::domain;
use crate::models::api::{HealthResponse, StatisticsResponse};

/// GET /api/statistics
pub async fn statistics_handler(
    State(pool): State<PgPool>,
) -> ApiResult<Json<StatisticsResponse>> {
    let statistics = domain::get_statistics(&pool).await?;
    Ok(Json(StatisticsResponse {
        success: true,
        statistics,
    }))
}

/// GET /api/health - a trivial store round-trip; an unreachable store is
/// the only failure mode.
pub async fn health_handler(State(pool): State<PgPool>) -> ApiResult<Json<HealthResponse>> {
    connection::ping(&pool)
        .await
        .map_err(|_| ApiError::Database("Database connection failed".to_string()))?;

    Ok(Json(HealthResponse {
        success: true,
        status: "healthy",
        message: "Database connection OK",
    }))
}
