//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::Span;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkRepository, StorageError};
use crate::infrastructure::persistence::PgStore;

const SELECT_BY_ID: &str = r#"
    SELECT link_id, url, date_create
    FROM links
    WHERE link_id = $1
"#;

#[derive(sqlx::FromRow)]
struct LinkRow {
    link_id: i64,
    url: String,
    date_create: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(row.link_id, row.url, row.date_create)
    }
}

/// PostgreSQL repository for link storage and retrieval.
///
/// All statements are parametrized. Each operation acquires its own connection
/// from the [`PgStore`] and releases it before returning.
pub struct PgLinkRepository {
    store: PgStore,
    span: Span,
}

impl PgLinkRepository {
    /// Creates a new repository over a store adapter.
    pub fn new(store: PgStore) -> Self {
        Self {
            store,
            span: tracing::info_span!("link_repository"),
        }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn get_by_id(&self, link_id: i64) -> Result<Option<Link>, StorageError> {
        let mut conn = self.store.acquire().await?;

        let row = sqlx::query_as::<_, LinkRow>(SELECT_BY_ID)
            .bind(link_id)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(row.map(Link::from))
    }

    async fn save(&self, new_link: NewLink) -> Result<Link, StorageError> {
        let mut conn = self.store.acquire().await?;

        let link_id: i64 =
            sqlx::query_scalar("INSERT INTO links (url) VALUES ($1) RETURNING link_id")
                .bind(&new_link.url)
                .fetch_one(&mut *conn)
                .await?;

        // Same connection, so the insert is visible to this read.
        let row = sqlx::query_as::<_, LinkRow>(SELECT_BY_ID)
            .bind(link_id)
            .fetch_optional(&mut *conn)
            .await?;

        match row {
            Some(row) => Ok(Link::from(row)),
            None => {
                tracing::error!(parent: &self.span, link_id, "Inserted link missing on re-read");
                Err(StorageError::Inconsistent(link_id))
            }
        }
    }

    async fn size(&self) -> Result<i64, StorageError> {
        let mut conn = self.store.acquire().await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(&mut *conn)
            .await?;

        Ok(count)
    }

    async fn delete_by_id(&self, link_id: i64) -> Result<bool, StorageError> {
        let mut conn = self.store.acquire().await?;

        let result = sqlx::query("DELETE FROM links WHERE link_id = $1")
            .bind(link_id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
