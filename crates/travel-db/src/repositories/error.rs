//! Error handling utilities for repositories

use sqlx::error::ErrorKind;
use sqlx::Error as SqlxError;
use travel_core::error::DomainError;

/// Convert a read-side SQLx error to `DomainError`
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Convert a write-side SQLx error
///
/// Unique violations go through `on_unique`, which receives the violated
/// constraint name. Foreign-key, check, and not-null violations are the
/// caller's fault and surface as `WriteFailed`. Anything else is a
/// database failure.
pub fn map_write_error<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce(Option<&str>) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        match db_err.kind() {
            ErrorKind::UniqueViolation => return on_unique(db_err.constraint()),
            ErrorKind::ForeignKeyViolation
            | ErrorKind::CheckViolation
            | ErrorKind::NotNullViolation => {
                return DomainError::WriteFailed(db_err.message().to_string());
            }
            _ => {}
        }
    }
    map_db_error(e)
}

/// Unique handler for tables whose natural keys are email and phone
pub fn contact_conflict(constraint: Option<&str>) -> DomainError {
    match constraint {
        Some(name) if name.ends_with("_email_key") => DomainError::EmailAlreadyExists,
        Some(name) if name.ends_with("_phone_key") => DomainError::PhoneAlreadyExists,
        Some(name) => DomainError::DuplicateRecord(name.to_string()),
        None => DomainError::DuplicateRecord("unique constraint".to_string()),
    }
}

/// Unique handler for tables keyed only by snowflake ID
pub fn duplicate_id(constraint: Option<&str>) -> DomainError {
    DomainError::DuplicateRecord(constraint.unwrap_or("primary key").to_string())
}
