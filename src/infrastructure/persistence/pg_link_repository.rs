//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::LinkRecord;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Row shape of the `links` table.
#[derive(sqlx::FromRow)]
struct LinkRow {
    id: String,
    url: String,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
}

impl From<LinkRow> for LinkRecord {
    fn from(row: LinkRow) -> Self {
        Self {
            id: row.id,
            url: row.url,
            created: row.created,
            updated: row.updated,
        }
    }
}

/// PostgreSQL repository for link records.
///
/// Upserts are a single `INSERT ... ON CONFLICT` statement, so concurrent
/// writers to the same id are serialized by the row lock and the last one wins.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn get(&self, id: &str) -> Result<Option<LinkRecord>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, url, created, updated
            FROM links
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(LinkRecord::from))
    }

    async fn upsert(&self, record: LinkRecord) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO links (id, url, created, updated)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET url = EXCLUDED.url,
                created = EXCLUDED.created,
                updated = EXCLUDED.updated
            "#,
        )
        .bind(&record.id)
        .bind(&record.url)
        .bind(record.created)
        .bind(record.updated)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
