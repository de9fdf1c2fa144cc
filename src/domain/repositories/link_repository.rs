//! Repository trait for link data access.

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::StorageError;
use async_trait::async_trait;

/// Repository interface for managing links.
///
/// The repository is the sole owner of persistence semantics: ID generation,
/// timestamps and row shape. Absence is a valid result here, never an error.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - Process-local implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] on any underlying store fault.
    async fn get_by_id(&self, link_id: i64) -> Result<Option<Link>, StorageError>;

    /// Inserts a new link and returns it fully populated.
    ///
    /// The store assigns `link_id` and `date_create`; the inserted row is then
    /// read back to obtain them.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Inconsistent`] if the inserted row cannot be read
    /// back, and other [`StorageError`] variants if the insert fails.
    async fn save(&self, new_link: NewLink) -> Result<Link, StorageError>;

    /// Counts stored links (0 when empty).
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] on any underlying store fault.
    async fn size(&self) -> Result<i64, StorageError>;

    /// Deletes a link by its identifier.
    ///
    /// Returns `Ok(true)` if a row was deleted, `Ok(false)` if none matched.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] on any underlying store fault.
    async fn delete_by_id(&self, link_id: i64) -> Result<bool, StorageError>;
}
