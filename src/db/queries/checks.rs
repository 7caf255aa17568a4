use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;

use crate::db::errors::Result;
use crate::models::records::ConsistencyCheckRecord;

/// Insert a consistency check. The platforms-differ rule is validated by
/// the domain layer before storage is touched; the table's CHECK
/// constraint is the backstop.
pub async fn insert_check(
    pool: &PgPool,
    user_group: &str,
    platform_a: &str,
    platform_b: &str,
    consistency_score: Decimal,
) -> Result<ConsistencyCheckRecord> {
    let check = sqlx::query_as::<_, ConsistencyCheckRecord>(
        r#"
        INSERT INTO consistency_checks
            (user_group, platform_a, platform_b, consistency_score)
        VALUES ($1, $2, $3, $4)
        RETURNING check_id, user_group, platform_a, platform_b,
                  consistency_score, checked_at
        "#,
    )
    .bind(user_group)
    .bind(platform_a)
    .bind(platform_b)
    .bind(consistency_score)
    .fetch_one(pool)
    .await?;

    info!(
        "Recorded consistency check {} for {} vs {}",
        check.check_id, platform_a, platform_b
    );
    Ok(check)
}

pub async fn list_checks(pool: &PgPool) -> Result<Vec<ConsistencyCheckRecord>> {
    let checks = sqlx::query_as::<_, ConsistencyCheckRecord>(
        r#"
        SELECT check_id, user_group, platform_a, platform_b,
               consistency_score, checked_at
        FROM consistency_checks
        ORDER BY checked_at DESC, check_id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(checks)
}

/// Mean consistency score across all checks; `None` when there are none.
pub async fn average_consistency_score(pool: &PgPool) -> Result<Option<Decimal>> {
    let avg =
        sqlx::query_scalar::<_, Option<Decimal>>("SELECT AVG(consistency_score) FROM consistency_checks")
            .fetch_one(pool)
            .await?;
    Ok(avg)
}
