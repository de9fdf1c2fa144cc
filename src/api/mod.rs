//! REST API layer for HTTP request/response handling.
//!
//! This layer validates input, calls the link service and shapes responses
//! according to the API contract. It holds no state of its own.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Extractors that validate input before handlers run
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration
//! - [`validation`] - Guard checks for path and body input

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod validation;
