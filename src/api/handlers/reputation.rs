use axum::{extract::State, Json};
use sqlx::PgPool;
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::api::handlers::non_empty;
use crate::domain;
use crate::models::api::{ReputationEventRequest, ReputationEventResponse};

/// POST /api/reputation-event
pub async fn log_reputation_event_handler(
    State(pool): State<PgPool>,
    Json(body): Json<ReputationEventRequest>,
) -> ApiResult<Json<ReputationEventResponse>> {
    let (Some(anchor_id), Some(event_type)) = (body.anchor_id, non_empty(body.event_type)) else {
        return Err(ApiError::Validation(
            "Missing required fields: anchor_id, event_type".to_string(),
        ));
    };

    info!(
        "Logging reputation event '{}' for anchor {} (impact {})",
        event_type, anchor_id, body.score_impact
    );

    let event = domain::log_reputation_event(
        &pool,
        anchor_id,
        &event_type,
        &body.platform,
        body.score_impact,
    )
    .await?;

    Ok(Json(ReputationEventResponse {
        success: true,
        event,
    }))
}
