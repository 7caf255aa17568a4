use axum::{extract::State, Json};
use sqlx::PgPool;
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::api::handlers::non_empty;
use crate::domain;
use crate::models::api::{
    AddVerificationRequest, VerificationListResponse, VerificationResponse,
};

/// POST /api/verification
pub async fn add_verification_handler(
    State(pool): State<PgPool>,
    Json(body): Json<AddVerificationRequest>,
) -> ApiResult<Json<VerificationResponse>> {
    let (Some(anchor_id), Some(platform_name), Some(profile_url)) = (
        body.anchor_id,
        non_empty(body.platform_name),
        non_empty(body.profile_url),
    ) else {
        return Err(ApiError::Validation(
            "Missing required fields: anchor_id, platform_name, profile_url".to_string(),
        ));
    };

    info!(
        "Processing verification request for anchor {} on {}",
        anchor_id, platform_name
    );

    let verification =
        domain::add_verification(&pool, anchor_id, &platform_name, &profile_url).await?;
    Ok(Json(VerificationResponse {
        success: true,
        verification,
    }))
}

/// GET /api/verifications
pub async fn list_verifications_handler(
    State(pool): State<PgPool>,
) -> ApiResult<Json<VerificationListResponse>> {
    let verifications = domain::list_verifications(&pool).await?;
    Ok(Json(VerificationListResponse {
        success: true,
        verifications,
    }))
}
