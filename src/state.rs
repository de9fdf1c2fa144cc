//! Shared application state.

use std::sync::Arc;

use crate::application::services::LinkService;

/// State injected into every handler.
///
/// Assembled once at startup; cloning only bumps the reference count.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>) -> Self {
        Self { link_service }
    }
}
