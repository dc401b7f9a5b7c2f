//! Authentication service
//!
//! Handles employee and admin login, session lock/unlock, validation and
//! logout. A session is a record in the session store plus a signed token
//! naming it; every state change goes through [`SessionState::apply`].

use chrono::Utc;
use tracing::{debug, info, instrument, warn};
use travel_common::{AdminSeedConfig, AppError};
use travel_core::{
    Admin, SessionEvent, SessionRecord, SessionRole, SessionState, Snowflake,
};
use uuid::Uuid;

use crate::dto::{AuthResponse, LoginRequest, ProfileResponse, SessionStatusResponse, UnlockRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with employee email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login_employee(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let employee = self
            .ctx
            .employee_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: employee not found");
                AppError::InvalidCredentials
            })?;

        let hash = self
            .ctx
            .employee_repo()
            .get_password_hash(employee.id)
            .await?
            .ok_or(AppError::InvalidCredentials)?;
        self.verify(&request.password, &hash, employee.id)?;

        self.open_session(employee.id, SessionRole::Employee, employee.into())
            .await
    }

    /// Login with admin email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login_admin(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let admin = self
            .ctx
            .admin_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: admin not found");
                AppError::InvalidCredentials
            })?;

        let hash = self
            .ctx
            .admin_repo()
            .get_password_hash(admin.id)
            .await?
            .ok_or(AppError::InvalidCredentials)?;
        self.verify(&request.password, &hash, admin.id)?;

        self.open_session(admin.id, SessionRole::Admin, admin.into())
            .await
    }

    /// Load the live session a token names
    ///
    /// Fails with `InvalidSession`/`SessionExpired` for anything that is not a
    /// current session of the principal the token was issued to. Locked
    /// sessions resolve; callers decide whether locked is acceptable.
    #[instrument(skip_all)]
    pub async fn resolve_session(&self, token: &str) -> ServiceResult<SessionRecord> {
        let claims = self.ctx.token_service().decode(token)?;
        let principal_id = claims.principal_id()?;

        let record = self
            .ctx
            .session_store()
            .get(&claims.sid)
            .await?
            .ok_or(AppError::InvalidSession)?;

        if record.principal_id != principal_id || record.role != claims.role {
            warn!(session_id = %claims.sid, "Session token does not match its record");
            return Err(AppError::InvalidSession.into());
        }
        if record.is_expired() {
            return Err(AppError::SessionExpired.into());
        }
        if !record.state.is_authenticated() {
            return Err(AppError::InvalidSession.into());
        }
        Ok(record)
    }

    /// Session check for the dashboard
    ///
    /// Never fails: any problem (no token, bad signature, expired, revoked,
    /// principal deleted) is reported as an invalid session.
    #[instrument(skip_all)]
    pub async fn validate_session(&self, token: Option<&str>) -> SessionStatusResponse {
        let Some(token) = token else {
            return SessionStatusResponse::invalid();
        };

        let record = match self.resolve_session(token).await {
            Ok(record) => record,
            Err(e) => {
                debug!(error = %e, "Session rejected");
                return SessionStatusResponse::invalid();
            }
        };

        match self.profile(&record).await {
            Ok(profile) => SessionStatusResponse::active(profile, record.state.is_locked()),
            Err(e) => {
                debug!(error = %e, "Session principal unavailable");
                SessionStatusResponse::invalid()
            }
        }
    }

    /// The account behind a session
    pub async fn profile(&self, record: &SessionRecord) -> ServiceResult<ProfileResponse> {
        let profile = match record.role {
            SessionRole::Employee => self
                .ctx
                .employee_repo()
                .find_by_id(record.principal_id)
                .await?
                .map(ProfileResponse::from),
            SessionRole::Admin => self
                .ctx
                .admin_repo()
                .find_by_id(record.principal_id)
                .await?
                .map(ProfileResponse::from),
        };
        profile.ok_or_else(|| AppError::InvalidSession.into())
    }

    /// Authenticated -> Locked
    #[instrument(skip_all, fields(session_id = %record.session_id))]
    pub async fn lock(&self, record: &SessionRecord) -> ServiceResult<SessionStatusResponse> {
        let next = record.state.apply(SessionEvent::Lock)?;
        let record = self.transition(record, next).await?;

        info!(principal_id = %record.principal_id, "Session locked");
        self.status(&record).await
    }

    /// Locked -> Authenticated, after re-checking the password
    ///
    /// A wrong password leaves the session locked.
    #[instrument(skip_all, fields(session_id = %record.session_id))]
    pub async fn unlock(
        &self,
        record: &SessionRecord,
        request: UnlockRequest,
    ) -> ServiceResult<SessionStatusResponse> {
        let next = record.state.apply(SessionEvent::Unlock)?;

        let hash = self
            .password_hash(record.role, record.principal_id)
            .await?
            .ok_or(AppError::InvalidSession)?;
        self.verify(&request.password, &hash, record.principal_id)?;

        let record = self.transition(record, next).await?;

        info!(principal_id = %record.principal_id, "Session unlocked");
        self.status(&record).await
    }

    /// End the session; the token stops resolving immediately
    #[instrument(skip_all, fields(session_id = %record.session_id))]
    pub async fn logout(&self, record: &SessionRecord) -> ServiceResult<()> {
        record.state.apply(SessionEvent::Logout)?;
        self.ctx.session_store().delete(&record.session_id).await?;

        info!(principal_id = %record.principal_id, role = %record.role, "Logged out");
        Ok(())
    }

    /// Create the configured admin account if no account uses its email
    ///
    /// Returns whether an account was created.
    #[instrument(skip_all, fields(email = %config.email))]
    pub async fn seed_admin(&self, config: &AdminSeedConfig) -> ServiceResult<bool> {
        if self
            .ctx
            .admin_repo()
            .find_by_email(&config.email)
            .await?
            .is_some()
        {
            debug!("Admin account already present");
            return Ok(false);
        }

        let hash = self.ctx.password_service().hash(&config.password)?;
        let admin = Admin::new(self.ctx.generate_id(), config.name.clone(), config.email.clone());
        self.ctx.admin_repo().create(&admin, &hash).await?;

        info!(admin_id = %admin.id, "Admin account seeded");
        Ok(true)
    }

    async fn open_session(
        &self,
        principal_id: Snowflake,
        role: SessionRole,
        profile: ProfileResponse,
    ) -> ServiceResult<AuthResponse> {
        let session_id = Uuid::new_v4().to_string();
        let issued = self
            .ctx
            .token_service()
            .issue(principal_id, role, &session_id)?;

        let record = SessionRecord {
            session_id,
            principal_id,
            role,
            state: SessionState::default().apply(SessionEvent::Login)?,
            created_at: Utc::now(),
            expires_at: issued.expires_at,
        };
        self.ctx.session_store().save(&record).await?;

        info!(principal_id = %principal_id, %role, "Logged in");
        Ok(AuthResponse {
            token: issued.token,
            expires_at: issued.expires_at,
            role,
            profile,
        })
    }

    async fn transition(
        &self,
        record: &SessionRecord,
        next: SessionState,
    ) -> ServiceResult<SessionRecord> {
        let mut record = record.clone();
        record.state = next;
        if !self.ctx.session_store().update(&record).await? {
            // logged out or revoked while this request was in flight
            return Err(AppError::InvalidSession.into());
        }
        Ok(record)
    }

    async fn status(&self, record: &SessionRecord) -> ServiceResult<SessionStatusResponse> {
        let profile = self.profile(record).await?;
        Ok(SessionStatusResponse::active(profile, record.state.is_locked()))
    }

    async fn password_hash(
        &self,
        role: SessionRole,
        principal_id: Snowflake,
    ) -> ServiceResult<Option<String>> {
        let hash = match role {
            SessionRole::Employee => self.ctx.employee_repo().get_password_hash(principal_id).await?,
            SessionRole::Admin => self.ctx.admin_repo().get_password_hash(principal_id).await?,
        };
        Ok(hash)
    }

    fn verify(&self, password: &str, hash: &str, principal_id: Snowflake) -> ServiceResult<()> {
        self.ctx
            .password_service()
            .verify_or_error(password, hash)
            .map_err(|e| {
                warn!(principal_id = %principal_id, "Password check failed");
                e.into()
            })
    }
}
