//! PostgreSQL implementation of the click log.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::Click;
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct ClickRow {
    id: i64,
    link_id: i64,
    timestamp: DateTime<Utc>,
}

impl From<ClickRow> for Click {
    fn from(r: ClickRow) -> Self {
        Click::new(r.id, r.link_id, r.timestamp)
    }
}

/// PostgreSQL repository for redirect events and link counters.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn record_click(&self, link_id: i64) -> Result<Click, AppError> {
        let mut tx = self.pool.begin().await?;

        // Relative update; never read-modify-write the counter in Rust.
        let updated = sqlx::query(
            r#"
            UPDATE links
            SET total_clicks = total_clicks + 1,
                last_clicked = NOW()
            WHERE id = $1
            "#,
        )
        .bind(link_id)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(AppError::not_found(
                "Link not found",
                json!({ "link_id": link_id }),
            ));
        }

        let row = sqlx::query_as::<_, ClickRow>(
            r#"
            INSERT INTO clicks (link_id)
            VALUES ($1)
            RETURNING id, link_id, timestamp
            "#,
        )
        .bind(link_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.into())
    }

    async fn list_by_link_id(&self, link_id: i64) -> Result<Vec<Click>, AppError> {
        let rows = sqlx::query_as::<_, ClickRow>(
            r#"
            SELECT id, link_id, timestamp
            FROM clicks
            WHERE link_id = $1
            ORDER BY timestamp DESC, id DESC
            "#,
        )
        .bind(link_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Click::from).collect())
    }

    async fn count_all(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clicks")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
