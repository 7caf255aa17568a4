use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, info};

use crate::db::errors::Result;
use crate::models::records::AnchorRecord;

/// Insert a new anchor with the initial trust score.
pub async fn insert_anchor(pool: &PgPool, public_key: &str) -> Result<AnchorRecord> {
    let anchor = sqlx::query_as::<_, AnchorRecord>(
        r#"
        INSERT INTO identity_anchors (public_key, trust_score)
        VALUES ($1, 50.0)
        RETURNING anchor_id, public_key, trust_score, created_at
        "#,
    )
    .bind(public_key)
    .fetch_one(pool)
    .await?;

    info!("Inserted identity anchor with ID: {}", anchor.anchor_id);
    Ok(anchor)
}

/// All anchors, newest-first.
pub async fn list_anchors(pool: &PgPool) -> Result<Vec<AnchorRecord>> {
    let anchors = sqlx::query_as::<_, AnchorRecord>(
        r#"
        SELECT anchor_id, public_key, trust_score, created_at
        FROM identity_anchors
        ORDER BY created_at DESC, anchor_id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(anchors)
}

pub async fn get_anchor(pool: &PgPool, anchor_id: i64) -> Result<Option<AnchorRecord>> {
    let anchor = sqlx::query_as::<_, AnchorRecord>(
        r#"
        SELECT anchor_id, public_key, trust_score, created_at
        FROM identity_anchors
        WHERE anchor_id = $1
        "#,
    )
    .bind(anchor_id)
    .fetch_optional(pool)
    .await?;

    Ok(anchor)
}

/// Point read with a row lock, for multi-step writes that must not race
/// with concurrent updates to the same anchor.
pub async fn get_anchor_for_update(
    tx: &mut Transaction<'_, Postgres>,
    anchor_id: i64,
) -> Result<Option<AnchorRecord>> {
    let anchor = sqlx::query_as::<_, AnchorRecord>(
        r#"
        SELECT anchor_id, public_key, trust_score, created_at
        FROM identity_anchors
        WHERE anchor_id = $1
        FOR UPDATE
        "#,
    )
    .bind(anchor_id)
    .fetch_optional(&mut **tx)
    .await?;

    Ok(anchor)
}

/// Substring match against the anchor id rendered as text or the public
/// key. An empty term matches everything. Case sensitivity is whatever
/// LIKE gives us.
pub async fn search_anchors(pool: &PgPool, term: &str) -> Result<Vec<AnchorRecord>> {
    debug!("Searching anchors for term: {:?}", term);

    let pattern = format!("%{}%", term);
    let anchors = sqlx::query_as::<_, AnchorRecord>(
        r#"
        SELECT anchor_id, public_key, trust_score, created_at
        FROM identity_anchors
        WHERE CAST(anchor_id AS TEXT) LIKE $1
           OR public_key LIKE $1
        ORDER BY created_at DESC, anchor_id DESC
        "#,
    )
    .bind(pattern)
    .fetch_all(pool)
    .await?;

    Ok(anchors)
}

/// Apply a signed delta to an anchor's trust score, clamped to [0, 100],
/// as a single atomic read-modify-write. Returns the new score, or `None`
/// when the anchor does not exist.
pub async fn adjust_trust_score(
    tx: &mut Transaction<'_, Postgres>,
    anchor_id: i64,
    delta: Decimal,
) -> Result<Option<Decimal>> {
    let score = sqlx::query_scalar::<_, Decimal>(
        r#"
        UPDATE identity_anchors
        SET trust_score = GREATEST(LEAST(trust_score + $2, 100), 0)
        WHERE anchor_id = $1
        RETURNING trust_score
        "#,
    )
    .bind(anchor_id)
    .bind(delta)
    .fetch_optional(&mut **tx)
    .await?;

    if let Some(score) = score {
        debug!("Adjusted trust score for anchor {}: {}", anchor_id, score);
    }
    Ok(score)
}

pub async fn count_anchors(pool: &PgPool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM identity_anchors")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Mean trust score across all anchors; `None` when there are none.
pub async fn average_trust_score(pool: &PgPool) -> Result<Option<Decimal>> {
    let avg = sqlx::query_scalar::<_, Option<Decimal>>("SELECT AVG(trust_score) FROM identity_anchors")
        .fetch_one(pool)
        .await?;
    Ok(avg)
}
