//! Session extractors
//!
//! The session token is read from the session cookie, falling back to an
//! `Authorization: Bearer` header. Each extractor resolves the token against
//! the session store for the current request only.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    extract::CookieJar,
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use travel_common::AppError;
use travel_core::{SessionRecord, SessionRole};
use travel_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// Raw session token from the request, if any
#[derive(Debug, Clone, Default)]
pub struct SessionToken(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);

        if let Some(cookie) = jar.get(&app_state.session_config().cookie_name) {
            if !cookie.value().is_empty() {
                return Ok(Self(Some(cookie.value().to_string())));
            }
        }

        let bearer = TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
            .ok()
            .map(|TypedHeader(Authorization(bearer))| bearer.token().to_string());
        Ok(Self(bearer))
    }
}

/// Any live session, locked or not
///
/// Used by the session endpoints themselves (profile, lock, unlock, logout).
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub record: SessionRecord,
}

impl SessionUser {
    pub fn role(&self) -> SessionRole {
        self.record.role
    }

    pub fn is_locked(&self) -> bool {
        self.record.state.is_locked()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let SessionToken(token) = SessionToken::from_request_parts(parts, state).await?;
        let token = token.ok_or(AppError::MissingAuth)?;

        let app_state = AppState::from_ref(state);
        let record = AuthService::new(app_state.service_context())
            .resolve_session(&token)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "Session rejected");
                e
            })?;

        Ok(Self { record })
    }
}

/// A live session that is not locked
///
/// Guards every mutation of the dashboard.
#[derive(Debug, Clone)]
pub struct ActiveSession(pub SessionUser);

#[async_trait]
impl<S> FromRequestParts<S> for ActiveSession
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = SessionUser::from_request_parts(parts, state).await?;
        if user.is_locked() {
            return Err(AppError::SessionLocked.into());
        }
        Ok(Self(user))
    }
}

/// An unlocked admin session
#[derive(Debug, Clone)]
pub struct AdminSession(pub SessionUser);

#[async_trait]
impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let ActiveSession(user) = ActiveSession::from_request_parts(parts, state).await?;
        if user.role() != SessionRole::Admin {
            return Err(AppError::AdminRequired.into());
        }
        Ok(Self(user))
    }
}
