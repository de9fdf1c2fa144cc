//! Handler for the link count endpoint.

use axum::{Json, extract::State};

use crate::api::dto::count::CountResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the total number of stored links.
///
/// # Endpoint
///
/// `GET /count`
///
/// # Response
///
/// ```json
/// { "count": 3 }
/// ```
///
/// # Errors
///
/// Returns 500 Internal Server Error on storage faults.
pub async fn count_handler(State(state): State<AppState>) -> Result<Json<CountResponse>, AppError> {
    let count = state.link_service.count().await?;
    Ok(Json(count.into()))
}
