//! API error envelope
//!
//! Every failure is returned as `{"error": "<message>"}` with the status code
//! of its kind.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::DomainError;

/// Message returned for every internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Error kinds surfaced to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    Validation,
    Unauthorized,
    NotFound,
    MethodNotAllowed,
    Internal,
}

impl ApiErrorKind {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation => write!(f, "validation_error"),
            Self::Unauthorized => write!(f, "auth_error"),
            Self::NotFound => write!(f, "not_found_error"),
            Self::MethodNotAllowed => write!(f, "method_not_allowed"),
            Self::Internal => write!(f, "internal_error"),
        }
    }
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// API error with its kind
#[derive(Debug)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    /// Underlying cause of an internal error; logged, never returned
    cause: Option<String>,
}

impl ApiError {
    /// Create a new API error
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
        }
    }

    /// Missing or malformed client input
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Validation, message)
    }

    /// Missing or invalid API key
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Unauthorized, message)
    }

    /// Unknown route or record
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::NotFound, message)
    }

    /// Path exists under another method
    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::MethodNotAllowed, message)
    }

    /// Internal failure; `cause` is logged and replaced by a generic message
    pub fn internal(cause: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Internal,
            message: INTERNAL_ERROR_MESSAGE.to_string(),
            cause: Some(cause.into()),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.kind.status()
    }

    pub fn response(&self) -> ApiErrorResponse {
        ApiErrorResponse {
            error: self.message.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Some(cause) = &self.cause {
            error!(kind = %self.kind, cause = %cause, "Request failed with internal error");
        }

        (self.status(), Json(self.response())).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Validation { message } => Self::bad_request(message),
            other => Self::internal(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(format!("Failed to serialize response: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ApiError {}
