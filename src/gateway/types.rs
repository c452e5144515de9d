//! Wire envelopes and the API error type.
//!
//! Every response carries a `success` flag; failures add a human-readable
//! `error` message and nothing else.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::catalog::models::Pokemon;

/// Error envelope used for every non-2xx response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

/// Token issuance response
#[derive(Debug, Serialize)]
pub struct TokenBody {
    pub success: bool,
    pub token: String,
    #[serde(rename = "expiresIn")]
    pub expires_in: String,
}

/// Catalog read response. `requested` and `notFound` only appear on batch
/// lookups; `notFound` is omitted entirely when nothing is missing.
#[derive(Debug, Serialize)]
pub struct CatalogBody {
    pub success: bool,
    pub data: Vec<Pokemon>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested: Option<usize>,
    #[serde(rename = "notFound", skip_serializing_if = "Option::is_none")]
    pub not_found: Option<Vec<i64>>,
}

pub type ApiResult<T> = Result<(StatusCode, Json<T>), ApiError>;

/// Create success response
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(data)))
}

/// API error carrying an HTTP status and the message exposed on the wire.
/// Internal causes never travel in here - log them at the call site.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Convenience for handler tail positions.
    pub fn into_err<T>(self) -> ApiResult<T> {
        Err(self)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}
