//! PostgreSQL store adapter.

use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};
use std::sync::Arc;
use tracing::Span;

use crate::domain::repositories::StorageError;

/// Store adapter over a PostgreSQL connection pool.
///
/// Repositories acquire exactly one connection per logical operation through
/// [`PgStore::acquire`]. The returned [`PoolConnection`] goes back to the pool
/// when dropped, so it is released on every exit path.
#[derive(Clone)]
pub struct PgStore {
    pool: Arc<PgPool>,
    span: Span,
}

impl PgStore {
    /// Creates a new store adapter over a connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self {
            pool,
            span: tracing::info_span!("store"),
        }
    }

    /// Acquires a pooled connection for a single repository operation.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Timeout`] if the pool cannot hand out a connection
    /// in time, or [`StorageError::Connection`] if the pool is unusable.
    pub async fn acquire(&self) -> Result<PoolConnection<Postgres>, StorageError> {
        self.pool.acquire().await.map_err(|e| {
            tracing::warn!(parent: &self.span, error = %e, "Failed to acquire connection");
            StorageError::from(e)
        })
    }

    /// Applies the embedded schema migrations.
    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(self.pool.as_ref()).await?;
        tracing::info!(parent: &self.span, "Migrations applied");
        Ok(())
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut => StorageError::Timeout(e.to_string()),
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => StorageError::Connection(e.to_string()),
            other => StorageError::Query(other.to_string()),
        }
    }
}
