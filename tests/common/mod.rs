#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use link_redirector::application::services::LinkService;
use link_redirector::domain::entities::{Link, NewLink};
use link_redirector::domain::repositories::{LinkRepository, StorageError};
use link_redirector::infrastructure::persistence::{
    InMemoryLinkRepository, PgLinkRepository, PgStore,
};
use link_redirector::routes::build_router;
use link_redirector::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Repository whose every operation fails with a connection fault.
///
/// Counts calls so tests can assert that validation failures never reach
/// the store.
#[derive(Default)]
pub struct FailingLinkRepository {
    calls: AtomicUsize,
}

impl FailingLinkRepository {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fault(&self) -> StorageError {
        self.calls.fetch_add(1, Ordering::SeqCst);
        StorageError::Connection("connection refused (os error 111)".to_string())
    }
}

#[async_trait]
impl LinkRepository for FailingLinkRepository {
    async fn get_by_id(&self, _link_id: i64) -> Result<Option<Link>, StorageError> {
        Err(self.fault())
    }

    async fn save(&self, _new_link: NewLink) -> Result<Link, StorageError> {
        Err(self.fault())
    }

    async fn size(&self) -> Result<i64, StorageError> {
        Err(self.fault())
    }

    async fn delete_by_id(&self, _link_id: i64) -> Result<bool, StorageError> {
        Err(self.fault())
    }
}

pub fn create_test_state(repository: Arc<dyn LinkRepository>) -> AppState {
    AppState::new(Arc::new(LinkService::new(repository)))
}

pub fn create_memory_state() -> AppState {
    create_test_state(Arc::new(InMemoryLinkRepository::new()))
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    let store = PgStore::new(Arc::new(pool));
    create_test_state(Arc::new(PgLinkRepository::new(store)))
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(build_router(state, "/")).unwrap()
}

pub fn create_memory_server() -> TestServer {
    create_test_server(create_memory_state())
}

/// Stores a link through the service, bypassing HTTP.
pub async fn create_test_link(state: &AppState, url: &str) -> Link {
    state.link_service.add(NewLink::new(url)).await.unwrap()
}
