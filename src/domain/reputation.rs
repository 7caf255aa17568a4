use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::db::queries::{anchors, events};
use crate::domain::DomainError;
use crate::models::records::ReputationEventRecord;

/// Append a reputation event for an existing anchor, applying its score
/// impact when there is one.
///
/// A zero impact is a pure log append: the trust score is not touched at
/// all, which is distinct from adjusting it to its current value. The
/// event row records the score as of after the impact, so history
/// reconstruction can lag over it.
pub async fn log_reputation_event(
    pool: &PgPool,
    anchor_id: i64,
    event_type: &str,
    platform: &str,
    score_impact: Decimal,
) -> Result<ReputationEventRecord, DomainError> {
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| DomainError::Database(format!("Failed to start transaction: {}", e)))?;

    let anchor = anchors::get_anchor_for_update(&mut tx, anchor_id)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("Identity anchor {} not found", anchor_id)))?;

    let score = if score_impact != Decimal::ZERO {
        anchors::adjust_trust_score(&mut tx, anchor_id, score_impact)
            .await?
            .ok_or_else(|| {
                DomainError::Internal(format!("Anchor {} disappeared during event", anchor_id))
            })?
    } else {
        anchor.trust_score
    };

    let event = events::insert_event(&mut tx, anchor_id, event_type, platform, score).await?;

    tx.commit()
        .await
        .map_err(|e| DomainError::Database(format!("Failed to commit transaction: {}", e)))?;

    Ok(event)
}
