use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::records::{
    AnchorRecord, ReputationEventRecord, TrustHistoryEntry, VerificationRecord,
};

/// An anchor with everything recorded about it, each list newest-first.
#[derive(Debug, Clone, Serialize)]
pub struct IdentityDetails {
    pub identity: AnchorRecord,
    pub verifications: Vec<VerificationRecord>,
    pub events: Vec<ReputationEventRecord>,
}

/// Current score plus up to the 20 most recent annotated events,
/// newest-first.
#[derive(Debug, Clone, Serialize)]
pub struct TrustHistory {
    pub current_score: Decimal,
    pub history: Vec<TrustHistoryEntry>,
}

/// Dashboard aggregates. Averages are 0.0 when the underlying collection
/// is empty.
#[derive(Debug, Clone, Serialize)]
pub struct Statistics {
    pub total_identities: i64,
    pub total_verifications: i64,
    pub avg_trust_score: Decimal,
    pub avg_consistency_score: Decimal,
}

/// Full identity export: the details plus an export timestamp and summary
/// counts.
#[derive(Debug, Clone, Serialize)]
pub struct IdentityExport {
    pub export_date: DateTime<Utc>,
    pub identity: AnchorRecord,
    pub verifications: Vec<VerificationRecord>,
    pub events: Vec<ReputationEventRecord>,
    pub statistics: ExportSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    pub total_verifications: usize,
    pub total_events: usize,
}
