//! REST API module.
//!
//! Thin handlers: extract the request, call the matching operation, wrap the
//! payload in the success envelope.

mod categories;
mod questions;
mod quizzes;

pub use categories::*;
pub use questions::*;
pub use quizzes::*;

use axum::{
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::AppError;

/// Success response envelope. The payload's fields sit beside `success`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse::new(data))
}

/// Decode a JSON request body.
///
/// Bodies are read as raw bytes so each endpoint decides which status a
/// malformed body maps to.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, serde_json::Error> {
    serde_json::from_slice(body)
}

/// Fallback for unknown paths.
pub async fn not_found() -> AppError {
    AppError::NotFound("No route matches the request path".to_string())
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Payload {
        deleted: i64,
    }

    #[test]
    fn test_envelope_flattens_payload() {
        let body = serde_json::to_value(ApiResponse::new(Payload { deleted: 4 })).unwrap();
        assert_eq!(body, json!({"success": true, "deleted": 4}));
    }

    #[test]
    fn test_parse_body() {
        let value: serde_json::Value = parse_body(&Bytes::from_static(b"{\"page\": 2}")).unwrap();
        assert_eq!(value["page"], 2);

        assert!(parse_body::<serde_json::Value>(&Bytes::from_static(b"{not json")).is_err());
        assert!(parse_body::<serde_json::Value>(&Bytes::new()).is_err());
    }
}
