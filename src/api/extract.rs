//! Extractors that validate request input.
//!
//! Validation failures reject the request with [`AppError::Validation`] before
//! the handler, and therefore the service layer, is reached.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::{StatusCode, request::Parts},
};

use crate::api::dto::link::NewLinkRequest;
use crate::api::validation::{LINK_ID_FIELD, validate_link_id, validate_new_link};
use crate::domain::entities::NewLink;
use crate::error::{AppError, Violation};

const BODY_FIELD: &str = "body";

/// A positive link identifier taken from the `{link_id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkId(pub i64);

impl<S> FromRequestParts<S> for LinkId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                AppError::validation(vec![Violation::new(LINK_ID_FIELD, e.body_text())])
            })?;

        validate_link_id(&raw)
            .map(LinkId)
            .map_err(|v| AppError::validation(vec![v]))
    }
}

/// A create-link request body that passed validation.
#[derive(Debug, Clone)]
pub struct ValidNewLink(pub NewLink);

impl<S> FromRequest<S> for ValidNewLink
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<NewLinkRequest>::from_request(req, state)
            .await
            .map_err(json_rejection)?;

        validate_new_link(&payload)
            .map(ValidNewLink)
            .map_err(AppError::validation)
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    tracing::debug!(error = %rejection.body_text(), "Rejected create-link body");

    let (status, message) = match rejection {
        JsonRejection::MissingJsonContentType(_) => (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "must be sent as application/json",
        ),
        JsonRejection::JsonSyntaxError(_) => (StatusCode::BAD_REQUEST, "must be valid JSON"),
        JsonRejection::JsonDataError(_) => (
            StatusCode::BAD_REQUEST,
            "must be a JSON object with a string url",
        ),
        _ => (StatusCode::BAD_REQUEST, "could not be read"),
    };

    AppError::validation_with_status(status, vec![Violation::new(BODY_FIELD, message)])
}
