//! HTTP error handling and response conversion.
//!
//! Every failure is rendered as
//! `{"status": "fail" | "error", "code": <discriminator>, "message": <text>}`.
//! Client errors use `"fail"` and carry a message the client can act on;
//! server errors use `"error"` and a generic message, with the detail only
//! going to the logs.

use crate::domain::shared::errors::{DomainError, PayloadError};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Referenced thread/comment/reply is absent (404).
    NotFound(String),

    /// Body is not usable JSON (400).
    BadRequest(String),

    /// Payload shape rejected by an entity (400).
    InvalidPayload(PayloadError),

    /// Payload is well-formed but violates a write rule (400).
    ValidationError(String),

    /// Missing or invalid credentials (401).
    Unauthorized(String),

    /// Authenticated but not allowed, e.g. not the owner (403).
    Forbidden(String),

    /// Storage failed underneath a use case (500).
    Database(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::InvalidPayload(err) => write!(f, "Invalid payload: {}", err.code()),
            Self::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            Self::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) | Self::InvalidPayload(_) | Self::ValidationError(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable discriminator for the failure.
    pub fn code(&self) -> String {
        match self {
            Self::NotFound(_) => "NOT_FOUND".into(),
            Self::BadRequest(_) => "BAD_REQUEST".into(),
            Self::InvalidPayload(err) => err.code(),
            Self::ValidationError(_) => "VALIDATION_ERROR".into(),
            Self::Unauthorized(_) => "AUTHENTICATION_ERROR".into(),
            Self::Forbidden(_) => "FORBIDDEN".into(),
            Self::Database(_) => "INTERNAL_ERROR".into(),
        }
    }

    /// User-safe message (no implementation details).
    fn user_message(&self) -> String {
        match self {
            Self::NotFound(msg)
            | Self::BadRequest(msg)
            | Self::ValidationError(msg)
            | Self::Unauthorized(msg)
            | Self::Forbidden(msg) => msg.clone(),
            Self::InvalidPayload(err) => err.user_message().into(),
            Self::Database(_) => "Internal server error".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("error={}", self);
        } else {
            tracing::warn!("error={}", self);
        }

        let body = json!({
            "status": if status.is_server_error() { "error" } else { "fail" },
            "code": self.code(),
            "message": self.user_message(),
        });
        (status, Json(body)).into_response()
    }
}

// === Domain Error Conversion ===

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(msg) => AppError::NotFound(msg),
            DomainError::Forbidden(msg) => AppError::Forbidden(msg),
            DomainError::InvalidPayload(err) => AppError::InvalidPayload(err),
            DomainError::ReplyNesting { .. } => {
                AppError::ValidationError("cannot reply to a reply".into())
            }
            DomainError::InfrastructureError(msg) => {
                tracing::error!(infrastructure_error = %msg);
                AppError::Database(msg)
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
