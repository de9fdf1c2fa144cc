//! API route configuration.

use crate::api::handlers::{
    add_link_handler, count_handler, delete_link_handler, link_info_handler,
    method_not_allowed_handler, redirect_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Link resource routes, relative to the base path they are mounted on.
///
/// # Endpoints
///
/// - `GET    /count`            - Number of stored links
/// - `POST   /`                 - Store a new link
/// - `GET    /{link_id}`        - Redirect to the stored URL
/// - `DELETE /{link_id}`        - Delete a link
/// - `GET    /{link_id}/info`   - Link metadata
///
/// Unsupported methods on these paths get a 405 `Errors` body.
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(add_link_handler))
        .route("/count", get(count_handler))
        .route(
            "/{link_id}",
            get(redirect_handler).delete(delete_link_handler),
        )
        .route("/{link_id}/info", get(link_info_handler))
        .method_not_allowed_fallback(method_not_allowed_handler)
}
