use axum::{
    extract::{Path, Query, State},
    Json,
};
use sqlx::PgPool;
use tracing::info;

use crate::api::error::ApiResult;
use crate::domain;
use crate::models::api::{
    ExportResponse, IdentityDetailResponse, IdentityListResponse, IdentityResponse, SearchParams,
    TrustHistoryResponse,
};

/// POST /api/identity - no input fields; the key is generated server-side.
pub async fn create_identity_handler(
    State(pool): State<PgPool>,
) -> ApiResult<Json<IdentityResponse>> {
    info!("Processing identity creation request");

    let identity = domain::create_identity(&pool).await?;
    Ok(Json(IdentityResponse {
        success: true,
        identity,
    }))
}

/// GET /api/identities
pub async fn list_identities_handler(
    State(pool): State<PgPool>,
) -> ApiResult<Json<IdentityListResponse>> {
    let identities = domain::list_identities(&pool).await?;
    Ok(Json(IdentityListResponse {
        success: true,
        identities,
    }))
}

/// GET /api/identities/search?q=term
pub async fn search_identities_handler(
    Query(params): Query<SearchParams>,
    State(pool): State<PgPool>,
) -> ApiResult<Json<IdentityListResponse>> {
    let identities = domain::search_identities(&pool, &params.q).await?;
    Ok(Json(IdentityListResponse {
        success: true,
        identities,
    }))
}

/// GET /api/identity/{anchor_id}
pub async fn identity_details_handler(
    Path(anchor_id): Path<i64>,
    State(pool): State<PgPool>,
) -> ApiResult<Json<IdentityDetailResponse>> {
    let details = domain::get_identity_details(&pool, anchor_id).await?;
    Ok(Json(IdentityDetailResponse {
        success: true,
        identity: details.identity,
        verifications: details.verifications,
        events: details.events,
    }))
}

/// GET /api/identity/{anchor_id}/export
pub async fn export_identity_handler(
    Path(anchor_id): Path<i64>,
    State(pool): State<PgPool>,
) -> ApiResult<Json<ExportResponse>> {
    info!("Exporting identity anchor {}", anchor_id);

    let data = domain::export_identity(&pool, anchor_id).await?;
    Ok(Json(ExportResponse {
        success: true,
        data,
    }))
}

/// GET /api/identity/{anchor_id}/history
pub async fn trust_history_handler(
    Path(anchor_id): Path<i64>,
    State(pool): State<PgPool>,
) -> ApiResult<Json<TrustHistoryResponse>> {
    let history = domain::get_trust_history(&pool, anchor_id).await?;
    Ok(Json(TrustHistoryResponse {
        success: true,
        current_score: history.current_score,
        history: history.history,
    }))
}
