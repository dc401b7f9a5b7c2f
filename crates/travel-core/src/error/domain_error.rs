//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Blog not found: {0}")]
    BlogNotFound(Snowflake),

    #[error("Destination not found: {0}")]
    DestinationNotFound(Snowflake),

    #[error("Partner not found: {0}")]
    PartnerNotFound(Snowflake),

    #[error("Employee not found: {0}")]
    EmployeeNotFound(Snowflake),

    #[error("Admin not found: {0}")]
    AdminNotFound(Snowflake),

    #[error("Contact message not found: {0}")]
    ContactMessageNotFound(Snowflake),

    #[error("Session not found")]
    SessionNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid phone number")]
    InvalidPhone,

    #[error("Main photo is required")]
    MissingMainPhoto,

    #[error("Gallery limit exceeded: max {limit} images, got {requested}")]
    GalleryLimitExceeded { limit: usize, requested: usize },

    #[error("Unsupported image type: {0}")]
    UnsupportedImageType(String),

    #[error("Image too large: max {max_bytes} bytes")]
    ImageTooLarge { max_bytes: usize },

    #[error("Invalid image path: {0}")]
    InvalidImagePath(String),

    /// Row write rejected by the database for a reason other than uniqueness
    #[error("Bad request: {0}")]
    WriteFailed(String),

    // =========================================================================
    // Authentication / Authorization Errors
    // =========================================================================
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Session is locked")]
    SessionLocked,

    #[error("Admin access required")]
    NotAdmin,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Phone number already in use")]
    PhoneAlreadyExists,

    #[error("Duplicate record: {0}")]
    DuplicateRecord(String),

    #[error("Cannot {event} a session that is {from}")]
    InvalidSessionTransition {
        from: &'static str,
        event: &'static str,
    },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::BlogNotFound(_) => "UNKNOWN_BLOG",
            Self::DestinationNotFound(_) => "UNKNOWN_DESTINATION",
            Self::PartnerNotFound(_) => "UNKNOWN_PARTNER",
            Self::EmployeeNotFound(_) => "UNKNOWN_EMPLOYEE",
            Self::AdminNotFound(_) => "UNKNOWN_ADMIN",
            Self::ContactMessageNotFound(_) => "UNKNOWN_CONTACT_MESSAGE",
            Self::SessionNotFound => "UNKNOWN_SESSION",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidPhone => "INVALID_PHONE",
            Self::MissingMainPhoto => "MISSING_MAIN_PHOTO",
            Self::GalleryLimitExceeded { .. } => "GALLERY_LIMIT_EXCEEDED",
            Self::UnsupportedImageType(_) => "UNSUPPORTED_IMAGE_TYPE",
            Self::ImageTooLarge { .. } => "IMAGE_TOO_LARGE",
            Self::InvalidImagePath(_) => "INVALID_IMAGE_PATH",
            Self::WriteFailed(_) => "BAD_REQUEST",

            // Auth
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::SessionLocked => "SESSION_LOCKED",
            Self::NotAdmin => "ADMIN_REQUIRED",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::PhoneAlreadyExists => "PHONE_ALREADY_EXISTS",
            Self::DuplicateRecord(_) => "DUPLICATE_RECORD",
            Self::InvalidSessionTransition { .. } => "INVALID_SESSION_TRANSITION",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::BlogNotFound(_)
                | Self::DestinationNotFound(_)
                | Self::PartnerNotFound(_)
                | Self::EmployeeNotFound(_)
                | Self::AdminNotFound(_)
                | Self::ContactMessageNotFound(_)
                | Self::SessionNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::InvalidPhone
                | Self::MissingMainPhoto
                | Self::GalleryLimitExceeded { .. }
                | Self::UnsupportedImageType(_)
                | Self::ImageTooLarge { .. }
                | Self::InvalidImagePath(_)
                | Self::WriteFailed(_)
        )
    }

    /// Check if the caller failed to prove who they are
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::SessionLocked | Self::NotAdmin)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists
                | Self::PhoneAlreadyExists
                | Self::DuplicateRecord(_)
                | Self::InvalidSessionTransition { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::BlogNotFound(Snowflake::new(1));
        assert_eq!(err.code(), "UNKNOWN_BLOG");

        let err = DomainError::GalleryLimitExceeded {
            limit: 10,
            requested: 11,
        };
        assert_eq!(err.code(), "GALLERY_LIMIT_EXCEEDED");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::BlogNotFound(Snowflake::new(1)).is_not_found());
        assert!(DomainError::DestinationNotFound(Snowflake::new(1)).is_not_found());
        assert!(!DomainError::EmailAlreadyExists.is_not_found());
    }

    #[test]
    fn test_classification() {
        assert!(DomainError::WriteFailed("fk".into()).is_validation());
        assert!(DomainError::MissingMainPhoto.is_validation());
        assert!(DomainError::SessionLocked.is_authorization());
        assert!(DomainError::InvalidCredentials.is_authentication());
        assert!(DomainError::PhoneAlreadyExists.is_conflict());
        assert!(!DomainError::StorageError("disk".into()).is_validation());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::PartnerNotFound(Snowflake::new(123));
        assert_eq!(err.to_string(), "Partner not found: 123");

        let err = DomainError::InvalidSessionTransition {
            from: "locked",
            event: "lock",
        };
        assert_eq!(err.to_string(), "Cannot lock a session that is locked");
    }
}
