//! Response types and error handling for API endpoints
//!
//! Every body is an envelope: `{"success": true, "data": ..., "message"?}` on
//! success and `{"success": false, "error": {"code", "message", "details"?}}`
//! on failure.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use travel_common::{domain_status, AppError, ErrorResponse};
use travel_core::DomainError;
use travel_service::{dto::ApiResponse, ServiceError};
use validator::ValidationErrors;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        let code = match self {
            Self::App(e) => e.status_code(),
            Self::Service(e) => e.status_code(),
            Self::Domain(e) => domain_status(e),
            Self::Validation(_) | Self::InvalidPath(_) | Self::InvalidBody(_) => 400,
            Self::PayloadTooLarge => 413,
            Self::Internal(_) => 500,
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidPath(_) => "INVALID_PATH_PARAMETER",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }

    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    /// Message for the client; server-side details stay in the logs
    fn public_message(&self) -> String {
        if self.status_code().is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        }
    }
}

/// Error envelope
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: ErrorResponse,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log server errors
        if status.is_server_error() {
            error!(error = ?self, "Server error occurred");
        }

        let mut detail = ErrorResponse {
            code: self.error_code().to_string(),
            message: self.public_message(),
            details: None,
        };
        if let Self::Validation(errors) = &self {
            detail = detail.with_details(serde_json::to_value(errors).unwrap_or_default());
        }

        let body = ErrorBody {
            success: false,
            error: detail,
        };
        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Successful JSON response wrapped in the success envelope
pub struct ApiJson<T> {
    data: T,
    message: Option<String>,
}

impl<T> ApiJson<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            message: None,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: Some(message.into()),
        }
    }
}

impl ApiJson<()> {
    /// Envelope with `"data": null`, used for deletions
    pub fn message(message: impl Into<String>) -> Self {
        Self::with_message((), message)
    }
}

impl<T: Serialize> IntoResponse for ApiJson<T> {
    fn into_response(self) -> Response {
        let body = match self.message {
            Some(message) => ApiResponse::with_message(self.data, message),
            None => ApiResponse::new(self.data),
        };
        Json(body).into_response()
    }
}

/// Created response (201)
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}
