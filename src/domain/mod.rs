//! Domain layer containing business entities and the persistence contract.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Storage backends implement the traits defined here.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions and the storage fault type

pub mod entities;
pub mod repositories;
