//! In-memory implementation of link repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkRepository, StorageError};

#[derive(Debug, Default)]
struct Inner {
    links: BTreeMap<i64, Link>,
    last_id: i64,
}

/// Process-local link storage.
///
/// Mirrors the PostgreSQL contract: identifiers start at 1, increase
/// monotonically and are never reused, even after deletion. Contents are lost
/// when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    inner: RwLock<Inner>,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn get_by_id(&self, link_id: i64) -> Result<Option<Link>, StorageError> {
        Ok(self.inner.read().await.links.get(&link_id).cloned())
    }

    async fn save(&self, new_link: NewLink) -> Result<Link, StorageError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;

        let link = Link::new(inner.last_id, new_link.url, Utc::now());
        inner.links.insert(link.link_id, link.clone());

        Ok(link)
    }

    async fn size(&self) -> Result<i64, StorageError> {
        Ok(self.inner.read().await.links.len() as i64)
    }

    async fn delete_by_id(&self, link_id: i64) -> Result<bool, StorageError> {
        Ok(self.inner.write().await.links.remove(&link_id).is_some())
    }
}
