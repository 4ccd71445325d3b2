//! Axum-specific error types and mappings.
//!
//! This module maps [`CoreError`] to HTTP status codes and response bodies.
//! Every error body is `{ "message": ... }` except the create-gallery schema
//! failure, which keeps its own envelope.

use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gallery_core::CoreError;
use thiserror::Error;
use tracing::error;

use crate::dto::{MessageResponse, SchemaErrorResponse};

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Create-gallery body without a usable `name`.
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// Conflict (resource already exists).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Upload larger than the configured body limit.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Stored file is not a decodable image.
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::InvalidSchema(description) => {
                let body = SchemaErrorResponse::name_required(description);
                return (StatusCode::BAD_REQUEST, Json(body)).into_response();
            }
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg),
            Self::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg),
            Self::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            Self::Internal(msg) => {
                error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(msg) => Self::BadRequest(msg),
            CoreError::InvalidSchema => Self::InvalidSchema(err.to_string()),
            CoreError::MissingDimensions | CoreError::PathEscape(_) => {
                Self::BadRequest(err.to_string())
            }
            CoreError::NotFound(msg) => Self::NotFound(msg),
            CoreError::AlreadyExists(msg) => Self::Conflict(msg),
            CoreError::Decode(_) => Self::Unprocessable(err.to_string()),
            CoreError::Storage(_) | CoreError::Internal(_) => Self::Internal(err.to_string()),
        }
    }
}

impl From<MultipartError> for HttpError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(err.body_text())
        } else {
            Self::BadRequest(err.body_text())
        }
    }
}
