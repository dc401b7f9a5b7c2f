//! Application error types
//!
//! Every failure that reaches the HTTP layer is an `AppError`; the status
//! code and machine-readable code are decided here.

use serde::Serialize;
use std::fmt;
use travel_core::DomainError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid session")]
    InvalidSession,

    #[error("Session expired")]
    SessionExpired,

    #[error("Missing authentication")]
    MissingAuth,

    // Authorization errors
    #[error("Session is locked")]
    SessionLocked,

    #[error("Admin access required")]
    AdminRequired,

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Resource errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Resource already exists: {0}")]
    AlreadyExists(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    // Rate limiting
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    // Infrastructure errors
    #[error("Database error: {0}")]
    Database(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) | Self::InvalidInput(_) => 400,

            Self::InvalidCredentials
            | Self::InvalidSession
            | Self::SessionExpired
            | Self::MissingAuth => 401,

            Self::SessionLocked | Self::AdminRequired => 403,

            Self::NotFound(_) => 404,

            Self::AlreadyExists(_) | Self::Conflict(_) => 409,

            Self::RateLimitExceeded => 429,

            Self::Database(_)
            | Self::Cache(_)
            | Self::Storage(_)
            | Self::Internal(_)
            | Self::Config(_) => 500,

            Self::Domain(e) => domain_status(e),
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidSession => "INVALID_SESSION",
            Self::SessionExpired => "SESSION_EXPIRED",
            Self::MissingAuth => "MISSING_AUTH",
            Self::SessionLocked => "SESSION_LOCKED",
            Self::AdminRequired => "ADMIN_REQUIRED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::AlreadyExists(_) => "ALREADY_EXISTS",
            Self::Conflict(_) => "CONFLICT",
            Self::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code())
    }

    /// Message safe to show a client; server-side details stay in the logs
    #[must_use]
    pub fn public_message(&self) -> String {
        if self.is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        }
    }

    #[must_use]
    pub fn not_found(resource: impl fmt::Display) -> Self {
        Self::NotFound(resource.to_string())
    }

    #[must_use]
    pub fn validation(msg: impl fmt::Display) -> Self {
        Self::Validation(msg.to_string())
    }

    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Error body nested under `"error"` in API responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.error_code().to_string(),
            message: err.public_message(),
            details: None,
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

/// HTTP status for a domain error, shared by every layer that wraps one
#[must_use]
pub fn domain_status(e: &DomainError) -> u16 {
    if e.is_not_found() {
        404
    } else if e.is_authentication() {
        401
    } else if e.is_authorization() {
        403
    } else if e.is_validation() {
        400
    } else if e.is_conflict() {
        409
    } else {
        500
    }
}
