//! Handler for link redirect.

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use url::Url;

use crate::api::extract::LinkId;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a link identifier to its stored URL.
///
/// # Endpoint
///
/// `GET /{link_id}`
///
/// Responds with 302 Found, the target in the `Location` header and an empty
/// body.
///
/// # Errors
///
/// Returns 400 Bad Request if `link_id` is not a positive integer.
/// Returns 404 Not Found if the link doesn't exist.
/// Returns 500 Internal Server Error on storage faults.
pub async fn redirect_handler(
    State(state): State<AppState>,
    LinkId(link_id): LinkId,
) -> Result<Response, AppError> {
    let url = state.link_service.get_url(link_id).await?;
    let location = location_header(&url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Builds a `Location` header value.
///
/// Non-ASCII URLs, and URLs holding characters not allowed in a header, are
/// re-serialized in their percent-encoded form.
fn location_header(url: &str) -> Result<HeaderValue, AppError> {
    if url.is_ascii()
        && let Ok(value) = HeaderValue::from_str(url)
    {
        return Ok(value);
    }

    Url::parse(url)
        .ok()
        .and_then(|parsed| HeaderValue::from_str(parsed.as_str()).ok())
        .ok_or_else(|| {
            tracing::error!(url, "Stored URL cannot be used as a Location header");
            AppError::internal()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_header_ascii() {
        let value = location_header("https://example.com/a?b=c").unwrap();
        assert_eq!(value, "https://example.com/a?b=c");
    }

    #[test]
    fn test_location_header_strips_control_characters() {
        let value = location_header("https://example.com/a\nb").unwrap();
        assert_eq!(value, "https://example.com/ab");
    }

    #[test]
    fn test_location_header_percent_encodes_unicode() {
        let value = location_header("https://example.com/päth").unwrap();
        assert_eq!(value, "https://example.com/p%C3%A4th");
    }
}
