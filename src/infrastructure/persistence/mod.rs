//! Repository implementations.
//!
//! # Components
//!
//! - [`PgStore`] - Store adapter: per-operation connection acquisition and
//!   translation of driver failures into [`crate::domain::repositories::StorageError`]
//! - [`PgLinkRepository`] - Link storage on PostgreSQL
//! - [`InMemoryLinkRepository`] - Process-local link storage

pub mod memory_link_repository;
pub mod pg_link_repository;
pub mod store;

pub use memory_link_repository::InMemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
pub use store::PgStore;
