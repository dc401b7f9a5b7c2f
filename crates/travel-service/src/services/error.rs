//! Errors raised by the services
//!
//! Domain and application errors pass through unchanged; the service layer
//! adds only "no such record" and request-shape failures of its own.

use thiserror::Error;
use travel_common::{domain_status, AppError};
use travel_core::DomainError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Domain rule violation or repository/storage failure
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Auth and other application errors
    #[error(transparent)]
    App(#[from] AppError),

    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => domain_status(e),
            Self::App(e) => e.status_code(),
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
        }
    }

    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }

    /// Missing record, whichever layer noticed
    pub fn is_not_found(&self) -> bool {
        self.status_code() == 404
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::NotFound { resource, id } => {
                AppError::NotFound(format!("{resource} {id}"))
            }
            ServiceError::Validation(msg) => AppError::Validation(msg),
        }
    }
}
