use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;

use crate::db::queries::{anchors, events, verifications};
use crate::domain::DomainError;
use crate::models::records::VerificationWithScore;
use crate::scoring;

/// Every verification raises the anchor's trust score by this much,
/// clamped at the ceiling.
const VERIFICATION_TRUST_DELTA: i64 = 5;

const SUCCESSFUL_VERIFICATION_EVENT: &str = "successful_verification";

/// Record a platform verification for an existing anchor.
///
/// The verification row, the clamped +5 score update, and the
/// `successful_verification` event are one unit: they run in a single
/// transaction, with the anchor row locked so concurrent verifications
/// against the same anchor serialize instead of losing updates. Any
/// failure after the first write rolls the whole unit back.
pub async fn add_verification(
    pool: &PgPool,
    anchor_id: i64,
    platform_name: &str,
    profile_url: &str,
) -> Result<VerificationWithScore, DomainError> {
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| DomainError::Database(format!("Failed to start transaction: {}", e)))?;

    // Dropping the tx on any early return rolls everything back.
    anchors::get_anchor_for_update(&mut tx, anchor_id)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("Identity anchor {} not found", anchor_id)))?;

    let token = scoring::generate_verification_token();
    let verification =
        verifications::insert_verification(&mut tx, anchor_id, platform_name, profile_url, &token)
            .await?;

    let new_score =
        anchors::adjust_trust_score(&mut tx, anchor_id, Decimal::from(VERIFICATION_TRUST_DELTA))
            .await?
            .ok_or_else(|| {
                DomainError::Internal(format!(
                    "Anchor {} disappeared during verification",
                    anchor_id
                ))
            })?;

    events::insert_event(
        &mut tx,
        anchor_id,
        SUCCESSFUL_VERIFICATION_EVENT,
        platform_name,
        new_score,
    )
    .await?;

    tx.commit()
        .await
        .map_err(|e| DomainError::Database(format!("Failed to commit transaction: {}", e)))?;

    info!(
        "Verified anchor {} on {} (trust score now {})",
        anchor_id, platform_name, new_score
    );

    Ok(VerificationWithScore {
        verification_id: verification.verification_id,
        anchor_id: verification.anchor_id,
        platform_name: verification.platform_name,
        profile_url: verification.profile_url,
        verification_token: verification.verification_token,
        verified_at: verification.verified_at,
        trust_score: new_score,
    })
}

pub async fn list_verifications(pool: &PgPool) -> Result<Vec<VerificationWithScore>, DomainError> {
    Ok(verifications::list_verifications(pool).await?)
}
