//! Password hashing and verification
//!
//! Argon2id with a random salt per hash.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

pub const MIN_PASSWORD_LEN: usize = 8;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// `Ok(false)` on mismatch; `Err` only when the stored hash is unreadable
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Password service for dependency injection
#[derive(Debug, Clone, Default)]
pub struct PasswordService;

impl PasswordService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        validate_password_strength(password)?;
        hash_password(password)
    }

    /// Verify and turn a mismatch into `InvalidCredentials`
    pub fn verify_or_error(&self, password: &str, hash: &str) -> Result<(), AppError> {
        if verify_password(password, hash)? {
            Ok(())
        } else {
            Err(AppError::InvalidCredentials)
        }
    }
}

/// Staff passwords need at least 8 characters with a letter and a digit
pub fn validate_password_strength(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }

    if !password.chars().any(char::is_alphabetic) {
        return Err(AppError::validation("Password must contain a letter"));
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(AppError::validation("Password must contain a digit"));
    }

    Ok(())
}
