use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::internal::{IdentityExport, Statistics};
use crate::models::records::{
    AnchorRecord, ConsistencyCheckRecord, ReputationEventRecord, TrustHistoryEntry,
    VerificationRecord, VerificationWithScore,
};

// -- Request bodies -----------------------------------------------------------
//
// Required fields are Options so that an incomplete body surfaces as a 400
// with the uniform envelope instead of a deserialization rejection. Empty
// strings count as missing.

#[derive(Debug, Deserialize)]
pub struct AddVerificationRequest {
    pub anchor_id: Option<i64>,
    pub platform_name: Option<String>,
    pub profile_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ConsistencyCheckRequest {
    pub user_group: Option<String>,
    pub platform_a: Option<String>,
    pub platform_b: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReputationEventRequest {
    pub anchor_id: Option<i64>,
    pub event_type: Option<String>,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub score_impact: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

// -- Success envelopes --------------------------------------------------------
//
// Every success response carries `success: true` plus one payload key; the
// failure envelope lives with ApiError in the API layer.

#[derive(Debug, Serialize)]
pub struct StatisticsResponse {
    pub success: bool,
    pub statistics: Statistics,
}

#[derive(Debug, Serialize)]
pub struct IdentityResponse {
    pub success: bool,
    pub identity: AnchorRecord,
}

#[derive(Debug, Serialize)]
pub struct IdentityListResponse {
    pub success: bool,
    pub identities: Vec<AnchorRecord>,
}

#[derive(Debug, Serialize)]
pub struct IdentityDetailResponse {
    pub success: bool,
    pub identity: AnchorRecord,
    pub verifications: Vec<VerificationRecord>,
    pub events: Vec<ReputationEventRecord>,
}

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub success: bool,
    pub data: IdentityExport,
}

#[derive(Debug, Serialize)]
pub struct TrustHistoryResponse {
    pub success: bool,
    pub current_score: Decimal,
    pub history: Vec<TrustHistoryEntry>,
}

#[derive(Debug, Serialize)]
pub struct VerificationResponse {
    pub success: bool,
    pub verification: VerificationWithScore,
}

#[derive(Debug, Serialize)]
pub struct VerificationListResponse {
    pub success: bool,
    pub verifications: Vec<VerificationWithScore>,
}

#[derive(Debug, Serialize)]
pub struct ConsistencyCheckResponse {
    pub success: bool,
    pub check: ConsistencyCheckRecord,
}

#[derive(Debug, Serialize)]
pub struct ConsistencyCheckListResponse {
    pub success: bool,
    pub checks: Vec<ConsistencyCheckRecord>,
}

#[derive(Debug, Serialize)]
pub struct ReputationEventResponse {
    pub success: bool,
    pub event: ReputationEventRecord,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub status: &'static str,
    pub message: &'static str,
}
