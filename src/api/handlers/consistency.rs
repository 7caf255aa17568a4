use axum::{extract::State, Json};
use sqlx::PgPool;

use crate::api::error::{ApiError, ApiResult};
use crate::api::handlers::non_empty;
use crate::domain;
use crate::models::api::{
    ConsistencyCheckListResponse, ConsistencyCheckRequest, ConsistencyCheckResponse,
};

/// POST /api/consistency-check
pub async fn run_consistency_check_handler(
    State(pool): State<PgPool>,
    Json(body): Json<ConsistencyCheckRequest>,
) -> ApiResult<Json<ConsistencyCheckResponse>> {
    let (Some(user_group), Some(platform_a), Some(platform_b)) = (
        non_empty(body.user_group),
        non_empty(body.platform_a),
        non_empty(body.platform_b),
    ) else {
        return Err(ApiError::Validation(
            "Missing required fields: user_group, platform_a, platform_b".to_string(),
        ));
    };

    let check =
        domain::run_consistency_check(&pool, &user_group, &platform_a, &platform_b).await?;
    Ok(Json(ConsistencyCheckResponse {
        success: true,
        check,
    }))
}

/// GET /api/consistency-checks
pub async fn list_consistency_checks_handler(
    State(pool): State<PgPool>,
) -> ApiResult<Json<ConsistencyCheckListResponse>> {
    let checks = domain::list_consistency_checks(&pool).await?;
    Ok(Json(ConsistencyCheckListResponse {
        success: true,
        checks,
    }))
}
