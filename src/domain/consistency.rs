use sqlx::PgPool;
use tracing::info;

use crate::db::queries::checks;
use crate::domain::DomainError;
use crate::models::records::ConsistencyCheckRecord;
use crate::scoring;

/// Run a consistency check between two platforms and record the result.
/// Comparing a platform against itself is rejected before storage is
/// touched.
pub async fn run_consistency_check(
    pool: &PgPool,
    user_group: &str,
    platform_a: &str,
    platform_b: &str,
) -> Result<ConsistencyCheckRecord, DomainError> {
    if platform_a == platform_b {
        return Err(DomainError::Validation(
            "Platforms must be different".to_string(),
        ));
    }

    let score = scoring::compute_consistency_score(user_group, platform_a, platform_b);
    let check = checks::insert_check(pool, user_group, platform_a, platform_b, score).await?;

    info!(
        "Consistency check {} scored {} for {} vs {}",
        check.check_id, check.consistency_score, platform_a, platform_b
    );
    Ok(check)
}

pub async fn list_consistency_checks(
    pool: &PgPool,
) -> Result<Vec<ConsistencyCheckRecord>, DomainError> {
    Ok(checks::list_checks(pool).await?)
}
