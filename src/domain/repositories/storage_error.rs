//! Storage fault raised by repository implementations.

use thiserror::Error;

/// An unexpected failure originating from the persistence layer.
///
/// Expected absence (an unknown link ID) is never a `StorageError`; it is
/// reported through `Option`/`bool` return values instead.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Connection(String),

    #[error("storage operation timed out: {0}")]
    Timeout(String),

    #[error("storage query failed: {0}")]
    Query(String),

    /// A row written by `save` could not be read back on the same connection.
    #[error("link {0} was inserted but could not be read back")]
    Inconsistent(i64),
}
