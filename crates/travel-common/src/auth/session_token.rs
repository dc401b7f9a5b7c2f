//! Signed session tokens
//!
//! A token only names a server-side session record (`sid`); whether the
//! session is still alive or locked is always decided by the record.

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use travel_core::{SessionRole, Snowflake};

use crate::error::AppError;

/// Claims carried by a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Principal ID (employee or admin)
    pub sub: String,
    pub role: SessionRole,
    /// Session record ID
    pub sid: String,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    pub fn principal_id(&self) -> Result<Snowflake, AppError> {
        Snowflake::parse(&self.sub).map_err(|_| AppError::InvalidSession)
    }
}

/// A freshly signed token and the instant it stops being accepted
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct SessionTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
}

impl SessionTokenService {
    #[must_use]
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    #[must_use]
    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Sign a token for `principal_id` pointing at session `sid`
    pub fn issue(
        &self,
        principal_id: Snowflake,
        role: SessionRole,
        sid: &str,
    ) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let expires_at = now + Duration::seconds(self.ttl_secs);
        let claims = SessionClaims {
            sub: principal_id.to_string(),
            role,
            sid: sid.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to sign session token: {e}")))?;

        // round to the second the token itself encodes
        let expires_at = Utc
            .timestamp_opt(claims.exp, 0)
            .single()
            .unwrap_or(expires_at);

        Ok(IssuedToken { token, expires_at })
    }

    /// Check signature and expiry
    pub fn decode(&self, token: &str) -> Result<SessionClaims, AppError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::SessionExpired,
                _ => AppError::InvalidSession,
            })
    }
}

impl std::fmt::Debug for SessionTokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokenService")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}
