//! Authentication utilities

mod password;
mod session_token;

pub use password::{hash_password, validate_password_strength, verify_password, PasswordService};
pub use session_token::{IssuedToken, SessionClaims, SessionTokenService};
