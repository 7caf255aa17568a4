use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sqlx::PgPool;

use crate::db::queries::{anchors, checks, events, verifications};

#[sqlx::test]
async fn insert_anchor_starts_at_initial_score(pool: PgPool) {
    let anchor = anchors::insert_anchor(&pool, &"ab".repeat(32)).await.unwrap();

    assert!(anchor.anchor_id > 0);
    assert_eq!(anchor.trust_score, dec!(50.0));
    assert_eq!(anchor.public_key, "ab".repeat(32));

    let fetched = anchors::get_anchor(&pool, anchor.anchor_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.public_key, anchor.public_key);
}

#[sqlx::test]
async fn missing_anchor_reads_as_none(pool: PgPool) {
    let anchor = anchors::get_anchor(&pool, 424242).await.unwrap();
    assert!(anchor.is_none());

    let mut tx = pool.begin().await.unwrap();
    let score = anchors::adjust_trust_score(&mut tx, 424242, dec!(5)).await.unwrap();
    assert!(score.is_none());
}

#[sqlx::test]
async fn trust_score_clamps_under_any_sequence(pool: PgPool) {
    let anchor = anchors::insert_anchor(&pool, "clamp-key").await.unwrap();

    let deltas: [(Decimal, Decimal); 5] = [
        (dec!(60), dec!(100)),   // 50 + 60 caps at the ceiling
        (dec!(30), dec!(100)),   // already at the ceiling
        (dec!(-250), dec!(0)),   // floor
        (dec!(-1), dec!(0)),     // already at the floor
        (dec!(37.25), dec!(37.25)),
    ];

    for (delta, expected) in deltas {
        let mut tx = pool.begin().await.unwrap();
        let score = anchors::adjust_trust_score(&mut tx, anchor.anchor_id, delta)
            .await
            .unwrap()
            .unwrap();
        tx.commit().await.unwrap();
        assert_eq!(score, expected, "after delta {}", delta);
    }
}

#[sqlx::test]
async fn search_matches_id_text_and_public_key(pool: PgPool) {
    let a = anchors::insert_anchor(&pool, "feedfacecafe").await.unwrap();
    let b = anchors::insert_anchor(&pool, "0123456789ab").await.unwrap();

    let by_key = anchors::search_anchors(&pool, "dface").await.unwrap();
    assert_eq!(by_key.len(), 1);
    assert_eq!(by_key[0].anchor_id, a.anchor_id);

    let by_id = anchors::search_anchors(&pool, &b.anchor_id.to_string())
        .await
        .unwrap();
    assert!(by_id.iter().any(|r| r.anchor_id == b.anchor_id));

    let all = anchors::search_anchors(&pool, "").await.unwrap();
    assert_eq!(all.len(), 2);
}

#[sqlx::test]
async fn verification_list_joins_current_score(pool: PgPool) {
    let anchor = anchors::insert_anchor(&pool, "join-key").await.unwrap();

    let mut tx = pool.begin().await.unwrap();
    verifications::insert_verification(&mut tx, anchor.anchor_id, "github", "https://github.com/x", "tok-1")
        .await
        .unwrap();
    anchors::adjust_trust_score(&mut tx, anchor.anchor_id, dec!(25))
        .await
        .unwrap();
    tx.commit().await.unwrap();

    let listed = verifications::list_verifications(&pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].platform_name, "github");
    assert_eq!(listed[0].trust_score, dec!(75.0));
}

#[sqlx::test]
async fn trust_history_lags_and_caps_at_twenty(pool: PgPool) {
    let anchor = anchors::insert_anchor(&pool, "history-key").await.unwrap();

    // 25 events whose snapshots are 1..=25, committed one at a time.
    for i in 1..=25i64 {
        let mut tx = pool.begin().await.unwrap();
        events::insert_event(&mut tx, anchor.anchor_id, "manual", "", Decimal::from(i))
            .await
            .unwrap();
        tx.commit().await.unwrap();
    }

    let history = events::trust_history(&pool, anchor.anchor_id).await.unwrap();
    assert_eq!(history.len(), 20);

    // Newest first: the latest event's predecessor snapshot was 24, and
    // the oldest surviving entry (event #6) follows snapshot 5.
    assert_eq!(history[0].previous_score, dec!(24));
    assert_eq!(history[19].previous_score, dec!(5));
}

#[sqlx::test]
async fn first_event_lags_to_initial_score(pool: PgPool) {
    let anchor = anchors::insert_anchor(&pool, "first-event").await.unwrap();

    let mut tx = pool.begin().await.unwrap();
    events::insert_event(&mut tx, anchor.anchor_id, "manual", "", dec!(72))
        .await
        .unwrap();
    tx.commit().await.unwrap();

    let history = events::trust_history(&pool, anchor.anchor_id).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].previous_score, dec!(50.0));
}

#[sqlx::test]
async fn equal_platforms_rejected_by_store_backstop(pool: PgPool) {
    let result = checks::insert_check(&pool, "group", "github", "github", dec!(70.0)).await;
    assert!(result.is_err());

    let recorded = checks::list_checks(&pool).await.unwrap();
    assert!(recorded.is_empty());
}

#[sqlx::test]
async fn averages_are_none_on_empty_collections(pool: PgPool) {
    assert!(anchors::average_trust_score(&pool).await.unwrap().is_none());
    assert!(checks::average_consistency_score(&pool)
        .await
        .unwrap()
        .is_none());

    anchors::insert_anchor(&pool, "avg-a").await.unwrap();
    anchors::insert_anchor(&pool, "avg-b").await.unwrap();
    let avg = anchors::average_trust_score(&pool).await.unwrap().unwrap();
    assert_eq!(avg, dec!(50.0));
}
