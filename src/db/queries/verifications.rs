use sqlx::{PgPool, Postgres, Transaction};
use tracing::info;

use crate::db::errors::Result;
use crate::models::records::{VerificationRecord, VerificationWithScore};

/// Insert a verification row. Anchor existence is the caller's
/// responsibility; this runs inside the caller's transaction so the row
/// never lands without its score bump and event.
pub async fn insert_verification(
    tx: &mut Transaction<'_, Postgres>,
    anchor_id: i64,
    platform_name: &str,
    profile_url: &str,
    verification_token: &str,
) -> Result<VerificationRecord> {
    let verification = sqlx::query_as::<_, VerificationRecord>(
        r#"
        INSERT INTO platform_verifications
            (anchor_id, platform_name, profile_url, verification_token)
        VALUES ($1, $2, $3, $4)
        RETURNING verification_id, anchor_id, platform_name, profile_url,
                  verification_token, verified_at
        "#,
    )
    .bind(anchor_id)
    .bind(platform_name)
    .bind(profile_url)
    .bind(verification_token)
    .fetch_one(&mut **tx)
    .await?;

    info!(
        "Inserted verification {} for anchor {} on {}",
        verification.verification_id, anchor_id, platform_name
    );
    Ok(verification)
}

/// All verifications joined with each anchor's current trust score,
/// newest-first.
pub async fn list_verifications(pool: &PgPool) -> Result<Vec<VerificationWithScore>> {
    let verifications = sqlx::query_as::<_, VerificationWithScore>(
        r#"
        SELECT v.verification_id, v.anchor_id, v.platform_name, v.profile_url,
               v.verification_token, v.verified_at, i.trust_score
        FROM platform_verifications v
        JOIN identity_anchors i ON i.anchor_id = v.anchor_id
        ORDER BY v.verified_at DESC, v.verification_id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(verifications)
}

pub async fn list_for_anchor(pool: &PgPool, anchor_id: i64) -> Result<Vec<VerificationRecord>> {
    let verifications = sqlx::query_as::<_, VerificationRecord>(
        r#"
        SELECT verification_id, anchor_id, platform_name, profile_url,
               verification_token, verified_at
        FROM platform_verifications
        WHERE anchor_id = $1
        ORDER BY verified_at DESC, verification_id DESC
        "#,
    )
    .bind(anchor_id)
    .fetch_all(pool)
    .await?;

    Ok(verifications)
}

pub async fn count_verifications(pool: &PgPool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM platform_verifications")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
