//! Handlers for link management endpoints (info, create, delete).

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::api::dto::link::LinkResponse;
use crate::api::extract::{LinkId, ValidNewLink};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the metadata of a link.
///
/// # Endpoint
///
/// `GET /{link_id}/info`
///
/// # Response
///
/// ```json
/// {
///   "linkId": 1,
///   "url": "https://example.com/a",
///   "dateCreate": "2024-05-01T12:30:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `link_id` is not a positive integer.
/// Returns 404 Not Found if the link doesn't exist.
/// Returns 500 Internal Server Error on storage faults.
pub async fn link_info_handler(
    State(state): State<AppState>,
    LinkId(link_id): LinkId,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get(link_id).await?;
    Ok(Json(link.into()))
}

/// Stores a new link.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a" }
/// ```
///
/// The identifier and creation timestamp are assigned by the store; values
/// supplied by the client are ignored.
///
/// # Errors
///
/// Returns 400 Bad Request with a `violations` body if the URL is missing or
/// malformed, or the body is not valid JSON.
/// Returns 415 Unsupported Media Type if the body is not `application/json`.
/// Returns 500 Internal Server Error on storage faults.
pub async fn add_link_handler(
    State(state): State<AppState>,
    ValidNewLink(new_link): ValidNewLink,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let link = state.link_service.add(new_link).await?;
    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Deletes a link.
///
/// # Endpoint
///
/// `DELETE /{link_id}`
///
/// Responds with 204 No Content. Deleting the same link twice yields 404 the
/// second time.
///
/// # Errors
///
/// Returns 400 Bad Request if `link_id` is not a positive integer.
/// Returns 404 Not Found if the link doesn't exist.
/// Returns 500 Internal Server Error on storage faults.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    LinkId(link_id): LinkId,
) -> Result<StatusCode, AppError> {
    state.link_service.delete(link_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
