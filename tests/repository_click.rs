mod common;

use shortlink::AppError;
use shortlink::domain::repositories::ClickRepository;
use shortlink::infrastructure::persistence::PgClickRepository;
use sqlx::PgPool;
use std::sync::Arc;

async fn link_counters(
    pool: &PgPool,
    link_id: i64,
) -> (i64, Option<chrono::DateTime<chrono::Utc>>) {
    sqlx::query_as("SELECT total_clicks, last_clicked FROM links WHERE id = $1")
        .bind(link_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test]
async fn test_record_click(pool: PgPool) {
    let link_id = common::create_test_link(&pool, "click01", "https://example.com").await;
    let repo = PgClickRepository::new(Arc::new(pool.clone()));

    let click = repo.record_click(link_id).await.unwrap();

    assert_eq!(click.link_id, link_id);
    assert_eq!(common::count_clicks(&pool, link_id).await, 1);

    let (total, last_clicked) = link_counters(&pool, link_id).await;
    assert_eq!(total, 1);
    assert_eq!(last_clicked, Some(click.timestamp));
}

#[sqlx::test]
async fn test_record_click_unknown_link(pool: PgPool) {
    let repo = PgClickRepository::new(Arc::new(pool.clone()));

    let result = repo.record_click(999_999).await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
    assert_eq!(common::count_all_clicks(&pool).await, 0);
}

#[sqlx::test]
async fn test_concurrent_clicks_are_all_counted(pool: PgPool) {
    let link_id = common::create_test_link(&pool, "conc001", "https://example.com").await;
    let repo = Arc::new(PgClickRepository::new(Arc::new(pool.clone())));

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.record_click(link_id).await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let (total, _) = link_counters(&pool, link_id).await;
    assert_eq!(total, 20);
    assert_eq!(common::count_clicks(&pool, link_id).await, 20);
}

#[sqlx::test]
async fn test_list_by_link_id_newest_first(pool: PgPool) {
    let link_id = common::create_test_link(&pool, "list001", "https://example.com").await;
    let other_id = common::create_test_link(&pool, "other01", "https://other.example").await;
    let repo = PgClickRepository::new(Arc::new(pool));

    let first = repo.record_click(link_id).await.unwrap();
    let second = repo.record_click(link_id).await.unwrap();
    repo.record_click(other_id).await.unwrap();

    let clicks = repo.list_by_link_id(link_id).await.unwrap();

    assert_eq!(clicks.len(), 2);
    assert_eq!(clicks[0].id, second.id);
    assert_eq!(clicks[1].id, first.id);
}

#[sqlx::test]
async fn test_count_all(pool: PgPool) {
    let a = common::create_test_link(&pool, "cnt0001", "https://a.example").await;
    let b = common::create_test_link(&pool, "cnt0002", "https://b.example").await;
    let repo = PgClickRepository::new(Arc::new(pool));

    repo.record_click(a).await.unwrap();
    repo.record_click(b).await.unwrap();
    repo.record_click(b).await.unwrap();

    assert_eq!(repo.count_all().await.unwrap(), 3);
}
