//! Application layer services implementing business logic.
//!
//! Services consume repository traits and turn repository outcomes into
//! domain-level success or failure for the HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link lifecycle (create, read, count, delete)

pub mod error;
pub mod services;

pub use error::ServiceError;
