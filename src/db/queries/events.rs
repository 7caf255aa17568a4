use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::info;

use crate::db::errors::Result;
use crate::models::records::{ReputationEventRecord, TrustHistoryEntry};

/// When reconstructing history, only the most recent events are returned.
pub const HISTORY_LIMIT: i64 = 20;

/// Append an event with the anchor's trust score as of just after the
/// event was applied. Runs inside the caller's transaction.
pub async fn insert_event(
    tx: &mut Transaction<'_, Postgres>,
    anchor_id: i64,
    event_type: &str,
    platform: &str,
    trust_score: Decimal,
) -> Result<ReputationEventRecord> {
    let event = sqlx::query_as::<_, ReputationEventRecord>(
        r#"
        INSERT INTO reputation_events (anchor_id, event_type, platform, trust_score)
        VALUES ($1, $2, $3, $4)
        RETURNING event_id, anchor_id, event_type, platform, trust_score, time_stamp
        "#,
    )
    .bind(anchor_id)
    .bind(event_type)
    .bind(platform)
    .bind(trust_score)
    .fetch_one(&mut **tx)
    .await?;

    info!(
        "Logged reputation event {} ({}) for anchor {}",
        event.event_id, event_type, anchor_id
    );
    Ok(event)
}

pub async fn list_for_anchor(pool: &PgPool, anchor_id: i64) -> Result<Vec<ReputationEventRecord>> {
    let events = sqlx::query_as::<_, ReputationEventRecord>(
        r#"
        SELECT event_id, anchor_id, event_type, platform, trust_score, time_stamp
        FROM reputation_events
        WHERE anchor_id = $1
        ORDER BY time_stamp DESC, event_id DESC
        "#,
    )
    .bind(anchor_id)
    .fetch_all(pool)
    .await?;

    Ok(events)
}

/// The 20 most recent events for an anchor, each annotated with the trust
/// score that immediately preceded it.
///
/// The lag runs over the full ascending event timeline so the annotation
/// is each event's predecessor snapshot; the first event has none and
/// falls back to the initial score. The outer query flips to newest-first
/// and applies the cap.
pub async fn trust_history(pool: &PgPool, anchor_id: i64) -> Result<Vec<TrustHistoryEntry>> {
    let history = sqlx::query_as::<_, TrustHistoryEntry>(
        r#"
        SELECT event_type, platform, time_stamp, previous_score
        FROM (
            SELECT event_id, event_type, platform, time_stamp,
                   COALESCE(
                       LAG(trust_score) OVER (ORDER BY time_stamp, event_id),
                       50.0
                   ) AS previous_score
            FROM reputation_events
            WHERE anchor_id = $1
        ) timeline
        ORDER BY time_stamp DESC, event_id DESC
        LIMIT $2
        "#,
    )
    .bind(anchor_id)
    .bind(HISTORY_LIMIT)
    .fetch_all(pool)
    .await?;

    Ok(history)
}
