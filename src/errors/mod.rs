//! Error handling module for the trivia backend.
//!
//! Every operation returns an [`AppError`] on failure; the HTTP status and the
//! response envelope are decided here, at the boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Client-facing messages, one per status code.
pub mod messages {
    pub const BAD_REQUEST: &str = "bad request";
    pub const NOT_FOUND: &str = "resource not found";
    pub const METHOD_NOT_ALLOWED: &str = "method not allowed";
    pub const UNPROCESSABLE: &str = "unprocessable";
    pub const SERVER_ERROR: &str = "server error";
}

/// Application error type.
///
/// The `String` payload is an internal detail. It is logged but never sent
/// to the client, which only sees the fixed message for the status code.
#[derive(Debug)]
pub enum AppError {
    /// Missing required field or malformed quiz request
    BadRequest(String),
    /// Missing entity or empty required result
    NotFound(String),
    /// Path exists but not for this verb
    MethodNotAllowed,
    /// Processing failed while creating, deleting or searching
    Unprocessable(String),
    /// Database error
    Database(String),
    /// Internal server error
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Numeric error code placed in the envelope's `error` field.
    pub fn error_code(&self) -> u16 {
        self.status_code().as_u16()
    }

    /// Fixed client-facing message.
    pub fn message(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => messages::BAD_REQUEST,
            AppError::NotFound(_) => messages::NOT_FOUND,
            AppError::MethodNotAllowed => messages::METHOD_NOT_ALLOWED,
            AppError::Unprocessable(_) => messages::UNPROCESSABLE,
            AppError::Database(_) | AppError::Internal(_) => messages::SERVER_ERROR,
        }
    }

    /// Internal detail for logs.
    pub fn detail(&self) -> &str {
        match self {
            AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::Unprocessable(msg)
            | AppError::Database(msg)
            | AppError::Internal(msg) => msg,
            AppError::MethodNotAllowed => "method not allowed",
        }
    }

    /// Collapse every failure except not-found and bad-request into 422.
    ///
    /// Used by the create, search and delete operations.
    pub fn into_unprocessable(self) -> Self {
        match self {
            AppError::NotFound(_) | AppError::BadRequest(_) | AppError::Unprocessable(_) => self,
            other => AppError::Unprocessable(other.detail().to_string()),
        }
    }

    /// Collapse every failure except not-found into 400.
    ///
    /// Used by the quiz operation.
    pub fn into_bad_request(self) -> Self {
        match self {
            AppError::NotFound(_) | AppError::BadRequest(_) => self,
            other => AppError::BadRequest(other.detail().to_string()),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.error_code(), self.message(), self.detail())
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        AppError::Database(format!("Database error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::debug!("JSON error: {:?}", err);
        AppError::BadRequest(format!("JSON error: {}", err))
    }
}

/// Error response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: &AppError) -> Self {
        Self {
            success: false,
            error: error.error_code(),
            message: error.message().to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", self.detail());
        } else {
            tracing::warn!(status = status.as_u16(), "{}", self.detail());
        }

        (status, Json(ErrorResponse::new(&self))).into_response()
    }
}
