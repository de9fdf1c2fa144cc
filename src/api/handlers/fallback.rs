//! Fallbacks that keep unmatched requests in the uniform error shape.

use axum::http::{Method, Uri};

use crate::error::AppError;

/// Answers requests whose path matches no route.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found(format!("No resource at {}", uri.path()))
}

/// Answers requests whose path matches a route that lacks the method.
pub async fn method_not_allowed_handler(method: Method, uri: Uri) -> AppError {
    AppError::method_not_allowed(format!(
        "Method {method} is not supported for {}",
        uri.path()
    ))
}
