//! Link entity representing a stored URL.

use chrono::{DateTime, Utc};

/// A stored URL record.
///
/// `link_id` and `date_create` are assigned by the store at insert time and never
/// change afterwards. Links are immutable: they can be created, read and
/// deleted, but not updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub link_id: i64,
    pub url: String,
    pub date_create: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(link_id: i64, url: String, date_create: DateTime<Utc>) -> Self {
        Self {
            link_id,
            url,
            date_create,
        }
    }
}

/// Input data for creating a new link.
///
/// Carries only the URL; the identifier and creation timestamp are owned by
/// the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub url: String,
}

impl NewLink {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}
