//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Testing
//!
//! See integration tests in `tests/repository_link.rs` for usage examples.

pub mod link_repository;
pub mod storage_error;

pub use link_repository::LinkRepository;
pub use storage_error::StorageError;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
