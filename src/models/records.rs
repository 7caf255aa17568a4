use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// identity_anchors row. `trust_score` is the bounded [0, 100] accumulator;
/// the clamp is enforced by the store-side update, not in application memory.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnchorRecord {
    pub anchor_id: i64,
    pub public_key: String,
    pub trust_score: Decimal,
    pub created_at: DateTime<Utc>,
}

/// platform_verifications row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VerificationRecord {
    pub verification_id: i64,
    pub anchor_id: i64,
    pub platform_name: String,
    pub profile_url: String,
    pub verification_token: String,
    pub verified_at: DateTime<Utc>,
}

/// Verification joined with the claiming anchor's current trust score.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VerificationWithScore {
    pub verification_id: i64,
    pub anchor_id: i64,
    pub platform_name: String,
    pub profile_url: String,
    pub verification_token: String,
    pub verified_at: DateTime<Utc>,
    pub trust_score: Decimal,
}

/// reputation_events row. `trust_score` is the anchor's score immediately
/// after this event was applied; the history query lags over it to recover
/// the score that preceded each event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReputationEventRecord {
    pub event_id: i64,
    pub anchor_id: i64,
    pub event_type: String,
    pub platform: String,
    pub trust_score: Decimal,
    pub time_stamp: DateTime<Utc>,
}

/// consistency_checks row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ConsistencyCheckRecord {
    pub check_id: i64,
    pub user_group: String,
    pub platform_a: String,
    pub platform_b: String,
    pub consistency_score: Decimal,
    pub checked_at: DateTime<Utc>,
}

/// One entry of the reconstructed trust history: an event annotated with
/// the score that immediately preceded it in time order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TrustHistoryEntry {
    pub event_type: String,
    pub platform: String,
    pub time_stamp: DateTime<Utc>,
    pub previous_score: Decimal,
}
