//! Domain-level failures surfaced by the service layer.

use thiserror::Error;

use crate::domain::repositories::StorageError;

/// Failure of a service operation.
///
/// `LinkNotFound` is an expected condition; `ServerError` wraps the storage
/// fault that caused it so it can be logged, but its details are never shown
/// to API clients.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Link with id {0} not found")]
    LinkNotFound(i64),

    #[error("Internal server error")]
    ServerError(#[source] StorageError),
}
