use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;

use crate::db::queries::{anchors, checks, events, verifications};
use crate::domain::DomainError;
use crate::models::internal::{
    ExportSummary, IdentityDetails, IdentityExport, Statistics, TrustHistory,
};
use crate::models::records::AnchorRecord;
use crate::scoring;

fn anchor_not_found(anchor_id: i64) -> DomainError {
    DomainError::NotFound(format!("Identity anchor {} not found", anchor_id))
}

/// Create a new identity anchor with a fresh public key and the initial
/// trust score.
pub async fn create_identity(pool: &PgPool) -> Result<AnchorRecord, DomainError> {
    let public_key = scoring::generate_identity_key();
    let anchor = anchors::insert_anchor(pool, &public_key).await?;

    info!("Created identity anchor {}", anchor.anchor_id);
    Ok(anchor)
}

pub async fn list_identities(pool: &PgPool) -> Result<Vec<AnchorRecord>, DomainError> {
    Ok(anchors::list_anchors(pool).await?)
}

/// Substring search over the anchor id rendered as text or the public
/// key; an empty term returns everything.
pub async fn search_identities(pool: &PgPool, term: &str) -> Result<Vec<AnchorRecord>, DomainError> {
    Ok(anchors::search_anchors(pool, term).await?)
}

/// The anchor plus all its verifications and events, newest-first.
pub async fn get_identity_details(
    pool: &PgPool,
    anchor_id: i64,
) -> Result<IdentityDetails, DomainError> {
    let identity = anchors::get_anchor(pool, anchor_id)
        .await?
        .ok_or_else(|| anchor_not_found(anchor_id))?;

    let verifications = verifications::list_for_anchor(pool, anchor_id).await?;
    let events = events::list_for_anchor(pool, anchor_id).await?;

    Ok(IdentityDetails {
        identity,
        verifications,
        events,
    })
}

/// Current score plus the most recent events annotated with the score
/// that preceded each one.
pub async fn get_trust_history(pool: &PgPool, anchor_id: i64) -> Result<TrustHistory, DomainError> {
    let identity = anchors::get_anchor(pool, anchor_id)
        .await?
        .ok_or_else(|| anchor_not_found(anchor_id))?;

    let history = events::trust_history(pool, anchor_id).await?;

    Ok(TrustHistory {
        current_score: identity.trust_score,
        history,
    })
}

/// Everything recorded about an anchor, stamped with the export time and
/// summary counts.
pub async fn export_identity(pool: &PgPool, anchor_id: i64) -> Result<IdentityExport, DomainError> {
    let details = get_identity_details(pool, anchor_id).await?;

    let statistics = ExportSummary {
        total_verifications: details.verifications.len(),
        total_events: details.events.len(),
    };

    Ok(IdentityExport {
        export_date: Utc::now(),
        identity: details.identity,
        verifications: details.verifications,
        events: details.events,
        statistics,
    })
}

/// Dashboard aggregates; averages degrade to 0.0 over empty collections.
pub async fn get_statistics(pool: &PgPool) -> Result<Statistics, DomainError> {
    let total_identities = anchors::count_anchors(pool).await?;
    let total_verifications = verifications::count_verifications(pool).await?;
    let avg_trust_score = anchors::average_trust_score(pool)
        .await?
        .unwrap_or(Decimal::ZERO);
    let avg_consistency_score = checks::average_consistency_score(pool)
        .await?
        .unwrap_or(Decimal::ZERO);

    Ok(Statistics {
        total_identities,
        total_verifications,
        avg_trust_score,
        avg_consistency_score,
    })
}
