//! Link lifecycle service.

use std::sync::Arc;
use tracing::Span;

use crate::application::ServiceError;
use crate::domain::entities::{Count, Link, NewLink};
use crate::domain::repositories::{LinkRepository, StorageError};

/// Service for creating, reading, counting and deleting links.
///
/// Applies no business rules beyond the repository: it turns "no such row"
/// into [`ServiceError::LinkNotFound`] and any storage fault into
/// [`ServiceError::ServerError`]. Faults are not retried.
pub struct LinkService<R: LinkRepository + ?Sized = dyn LinkRepository> {
    link_repository: Arc<R>,
    span: Span,
}

impl<R: LinkRepository + ?Sized> LinkService<R> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<R>) -> Self {
        Self {
            link_repository,
            span: tracing::info_span!("link_service"),
        }
    }

    /// Retrieves a link by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::LinkNotFound`] if no link has this ID.
    /// Returns [`ServiceError::ServerError`] on storage faults.
    pub async fn get(&self, link_id: i64) -> Result<Link, ServiceError> {
        match self.link_repository.get_by_id(link_id).await {
            Ok(Some(link)) => Ok(link),
            Ok(None) => Err(self.not_found(link_id)),
            Err(e) => Err(self.server_error("get", e)),
        }
    }

    /// Resolves a link identifier to its target URL.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get`].
    pub async fn get_url(&self, link_id: i64) -> Result<String, ServiceError> {
        self.get(link_id).await.map(|link| link.url)
    }

    /// Stores a new link and returns it with its assigned ID and timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::ServerError`] on storage faults.
    pub async fn add(&self, new_link: NewLink) -> Result<Link, ServiceError> {
        let link = self
            .link_repository
            .save(new_link)
            .await
            .map_err(|e| self.server_error("add", e))?;

        tracing::info!(parent: &self.span, link_id = link.link_id, "Link created");
        Ok(link)
    }

    /// Counts stored links.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::ServerError`] on storage faults.
    pub async fn count(&self) -> Result<Count, ServiceError> {
        self.link_repository
            .size()
            .await
            .map(Count::new)
            .map_err(|e| self.server_error("count", e))
    }

    /// Deletes a link.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::LinkNotFound`] if no link has this ID, including
    /// one that was already deleted.
    /// Returns [`ServiceError::ServerError`] on storage faults.
    pub async fn delete(&self, link_id: i64) -> Result<(), ServiceError> {
        match self.link_repository.delete_by_id(link_id).await {
            Ok(true) => {
                tracing::info!(parent: &self.span, link_id, "Link deleted");
                Ok(())
            }
            Ok(false) => Err(self.not_found(link_id)),
            Err(e) => Err(self.server_error("delete", e)),
        }
    }

    fn not_found(&self, link_id: i64) -> ServiceError {
        tracing::debug!(parent: &self.span, link_id, "Link not found");
        ServiceError::LinkNotFound(link_id)
    }

    fn server_error(&self, operation: &'static str, error: StorageError) -> ServiceError {
        tracing::error!(parent: &self.span, operation, error = %error, "Storage fault");
        ServiceError::ServerError(error)
    }
}
