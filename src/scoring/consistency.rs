use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use sha2::{Digest, Sha256};

// Simulated score range, in hundredths (65.00 to 98.00).
const SCORE_FLOOR_CENTS: i64 = 6500;
const SCORE_CEILING_CENTS: i64 = 9800;

/// Compute the simulated cross-platform consistency score for a check.
///
/// The draw is deterministic: the RNG is seeded from a hash of the
/// `(user_group, platform_a, platform_b)` triple, so repeating a check
/// always yields the same score. The result is uniform over
/// `[65.00, 98.00]` at two decimal places. No real behavioral signal
/// backs this value.
pub fn compute_consistency_score(user_group: &str, platform_a: &str, platform_b: &str) -> Decimal {
    let mut hasher = Sha256::new();
    hasher.update(user_group.as_bytes());
    hasher.update([0u8]);
    hasher.update(platform_a.as_bytes());
    hasher.update([0u8]);
    hasher.update(platform_b.as_bytes());
    let digest = hasher.finalize();

    let mut seed = [0u8; 8];
    seed.copy_from_slice(&digest[..8]);

    let mut rng = StdRng::seed_from_u64(u64::from_le_bytes(seed));
    let cents = rng.gen_range(SCORE_FLOOR_CENTS..=SCORE_CEILING_CENTS);
    Decimal::new(cents, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn score_stays_within_bounds() {
        for i in 0..200 {
            let group = format!("group-{}", i);
            let score = compute_consistency_score(&group, "github", "reddit");
            assert!(score >= dec!(65.0), "score {} below floor", score);
            assert!(score <= dec!(98.0), "score {} above ceiling", score);
        }
    }

    #[test]
    fn same_triple_yields_same_score() {
        let a = compute_consistency_score("power-users", "github", "mastodon");
        let b = compute_consistency_score("power-users", "github", "mastodon");
        assert_eq!(a, b);
    }

    #[test]
    fn score_has_at_most_two_decimal_places() {
        let score = compute_consistency_score("casual", "bluesky", "lobsters");
        assert_eq!(score, score.round_dp(2));
    }

    #[test]
    fn distinct_triples_are_not_all_identical() {
        let baseline = compute_consistency_score("g0", "github", "reddit");
        let varied = (1..6)
            .map(|i| compute_consistency_score(&format!("g{}", i), "github", "reddit"))
            .any(|s| s != baseline);
        assert!(varied);
    }
}
