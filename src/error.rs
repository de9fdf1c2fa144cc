//! HTTP error type and the uniform error bodies.
//!
//! Two body shapes are produced:
//!
//! - Domain errors (404, 405, 500): `{"code": 404, "errors": [{"message": "..."}]}`
//! - Validation errors (400, 415): `{"code": 400, "violations": [{"field": "...", "message": "..."}]}`

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::application::ServiceError;

/// Message returned for every server-side failure. Details are only logged.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// A single human-readable error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}

/// Body of a domain error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Errors {
    pub code: u16,
    pub errors: Vec<ErrorMessage>,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Body of a validation error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violations {
    pub code: u16,
    pub violations: Vec<Violation>,
}

#[derive(Debug)]
pub enum AppError {
    Validation {
        status: StatusCode,
        violations: Vec<Violation>,
    },
    NotFound {
        message: String,
    },
    MethodNotAllowed {
        message: String,
    },
    Internal {
        message: String,
    },
}

impl AppError {
    /// Input validation failure reported with status 400.
    pub fn validation(violations: Vec<Violation>) -> Self {
        Self::Validation {
            status: StatusCode::BAD_REQUEST,
            violations,
        }
    }

    /// Input validation failure reported with a specific client-error status.
    pub fn validation_with_status(status: StatusCode, violations: Vec<Violation>) -> Self {
        Self::Validation { status, violations }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::MethodNotAllowed {
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self::Internal {
            message: INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    /// HTTP status the error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { status, .. } => *status,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::LinkNotFound(_) => AppError::not_found(e.to_string()),
            ServiceError::ServerError(_) => AppError::internal(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = status.as_u16();

        match self {
            AppError::Validation { violations, .. } => {
                (status, Json(Violations { code, violations })).into_response()
            }
            AppError::NotFound { message }
            | AppError::MethodNotAllowed { message }
            | AppError::Internal { message } => {
                let body = Errors {
                    code,
                    errors: vec![ErrorMessage { message }],
                };
                (status, Json(body)).into_response()
            }
        }
    }
}
