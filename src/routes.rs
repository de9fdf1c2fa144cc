//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check (always at the root)
//! - `{base_path}/*`     - Link resource (see [`crate::api::routes::link_routes`])
//!
//! Unmatched paths get a 404 `Errors` body.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, not_found_handler};
use crate::api::middleware::tracing;
use crate::api::routes::link_routes;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and the tracing layer.
///
/// `base_path` is either `/` (routes mounted at the root) or a path such as
/// `/links` without a trailing slash.
pub fn build_router(state: AppState, base_path: &str) -> Router {
    let router = Router::new().route("/health", get(health_handler));

    let router = if base_path == "/" {
        router.merge(link_routes())
    } else {
        router.nest(base_path, link_routes())
    };

    router
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application with trailing-slash normalization applied before
/// routing.
pub fn app_router(state: AppState, base_path: &str) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, base_path))
}
