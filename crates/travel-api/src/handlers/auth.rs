//! Authentication handlers
//!
//! The same endpoints are mounted under `/auth/employee` and `/auth/admin`;
//! the router attaches the role as an [`Extension`], and a session of the
//! other role is treated as no session at all.

use axum::{extract::State, Extension};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use travel_common::{AppError, SessionConfig};
use travel_core::SessionRole;
use travel_service::{
    dto::{AuthResponse, LoginRequest, ProfileResponse, SessionStatusResponse, UnlockRequest},
    AuthService,
};

use crate::extractors::{SessionToken, SessionUser, ValidatedJson};
use crate::response::{ApiError, ApiJson, ApiResult};
use crate::state::AppState;

/// Login with email and password
///
/// POST /auth/{role}/login
pub async fn login(
    State(state): State<AppState>,
    Extension(role): Extension<SessionRole>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<(CookieJar, ApiJson<AuthResponse>)> {
    let service = AuthService::new(state.service_context());
    let response = match role {
        SessionRole::Employee => service.login_employee(request).await?,
        SessionRole::Admin => service.login_admin(request).await?,
    };

    let jar = jar.add(session_cookie(state.session_config(), response.token.clone()));
    Ok((jar, ApiJson::with_message(response, "Login successful")))
}

/// Current session state; never fails
///
/// GET /auth/{role}/session
pub async fn session_status(
    State(state): State<AppState>,
    Extension(role): Extension<SessionRole>,
    SessionToken(token): SessionToken,
) -> ApiJson<SessionStatusResponse> {
    let status = AuthService::new(state.service_context())
        .validate_session(token.as_deref())
        .await;

    if status.is_valid && status.role != Some(role) {
        return ApiJson::new(SessionStatusResponse::invalid());
    }
    ApiJson::new(status)
}

/// GET /auth/{role}/profile
pub async fn profile(
    State(state): State<AppState>,
    Extension(role): Extension<SessionRole>,
    user: SessionUser,
) -> ApiResult<ApiJson<ProfileResponse>> {
    ensure_role(&user, role)?;
    let profile = AuthService::new(state.service_context())
        .profile(&user.record)
        .await?;
    Ok(ApiJson::new(profile))
}

/// POST /auth/{role}/lock
pub async fn lock(
    State(state): State<AppState>,
    Extension(role): Extension<SessionRole>,
    user: SessionUser,
) -> ApiResult<ApiJson<SessionStatusResponse>> {
    ensure_role(&user, role)?;
    let status = AuthService::new(state.service_context())
        .lock(&user.record)
        .await?;
    Ok(ApiJson::with_message(status, "Session locked"))
}

/// Unlock with the account password
///
/// POST /auth/{role}/unlock
pub async fn unlock(
    State(state): State<AppState>,
    Extension(role): Extension<SessionRole>,
    user: SessionUser,
    ValidatedJson(request): ValidatedJson<UnlockRequest>,
) -> ApiResult<ApiJson<SessionStatusResponse>> {
    ensure_role(&user, role)?;
    let status = AuthService::new(state.service_context())
        .unlock(&user.record, request)
        .await?;
    Ok(ApiJson::with_message(status, "Session unlocked"))
}

/// POST /auth/{role}/logout
pub async fn logout(
    State(state): State<AppState>,
    Extension(role): Extension<SessionRole>,
    jar: CookieJar,
    user: SessionUser,
) -> ApiResult<(CookieJar, ApiJson<()>)> {
    ensure_role(&user, role)?;
    AuthService::new(state.service_context())
        .logout(&user.record)
        .await?;

    let name = state.session_config().cookie_name.clone();
    let jar = jar.remove(Cookie::build((name, "")).path("/"));
    Ok((jar, ApiJson::message("Logged out successfully")))
}

fn ensure_role(user: &SessionUser, role: SessionRole) -> Result<(), ApiError> {
    if user.role() == role {
        Ok(())
    } else {
        Err(AppError::InvalidSession.into())
    }
}

fn session_cookie(config: &SessionConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Lax)
        .build()
}
