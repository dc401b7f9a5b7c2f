//! Service context - dependency container for services
//!
//! Holds all repositories, the session and image stores, and the other
//! dependencies needed by services.

use std::sync::Arc;

use travel_cache::SharedRedisPool;
use travel_common::{PasswordService, SessionTokenService};
use travel_core::traits::{
    AdminRepository, BlogRepository, ContactMessageRepository, DestinationRepository,
    EmployeeRepository, ImageStore, PartnerRepository, SessionStore,
};
use travel_core::{Snowflake, SnowflakeGenerator};
use travel_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Default upload limit when none is configured (5 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The Redis-backed session store
/// - Image storage
/// - Session token signing and password hashing
/// - Snowflake generator for ID generation
///
/// The raw pools are optional so services can run against in-memory
/// ports; readiness reports them unhealthy when absent.
#[derive(Clone)]
pub struct ServiceContext {
    pool: Option<PgPool>,
    redis_pool: Option<SharedRedisPool>,

    // Repositories
    blog_repo: Arc<dyn BlogRepository>,
    destination_repo: Arc<dyn DestinationRepository>,
    partner_repo: Arc<dyn PartnerRepository>,
    employee_repo: Arc<dyn EmployeeRepository>,
    admin_repo: Arc<dyn AdminRepository>,
    contact_message_repo: Arc<dyn ContactMessageRepository>,

    // Stores
    session_store: Arc<dyn SessionStore>,
    image_store: Arc<dyn ImageStore>,

    // Services
    token_service: Arc<SessionTokenService>,
    password_service: PasswordService,
    snowflake_generator: Arc<SnowflakeGenerator>,

    max_upload_bytes: usize,
}

impl ServiceContext {
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Pools ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    /// Get the Redis connection pool
    pub fn redis_pool(&self) -> Option<&SharedRedisPool> {
        self.redis_pool.as_ref()
    }

    // === Repositories ===

    pub fn blog_repo(&self) -> &dyn BlogRepository {
        self.blog_repo.as_ref()
    }

    pub fn destination_repo(&self) -> &dyn DestinationRepository {
        self.destination_repo.as_ref()
    }

    pub fn partner_repo(&self) -> &dyn PartnerRepository {
        self.partner_repo.as_ref()
    }

    pub fn employee_repo(&self) -> &dyn EmployeeRepository {
        self.employee_repo.as_ref()
    }

    pub fn admin_repo(&self) -> &dyn AdminRepository {
        self.admin_repo.as_ref()
    }

    pub fn contact_message_repo(&self) -> &dyn ContactMessageRepository {
        self.contact_message_repo.as_ref()
    }

    // === Stores ===

    /// Get the login session store
    pub fn session_store(&self) -> &dyn SessionStore {
        self.session_store.as_ref()
    }

    /// Get the uploaded image store
    pub fn image_store(&self) -> &dyn ImageStore {
        self.image_store.as_ref()
    }

    // === Services ===

    /// Get the session token signer
    pub fn token_service(&self) -> &SessionTokenService {
        self.token_service.as_ref()
    }

    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }

    /// Largest accepted upload, in bytes
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("redis_pool", &self.redis_pool.as_ref().map(|_| "SharedRedisPool"))
            .field("repositories", &"...")
            .field("stores", &"...")
            .field("max_upload_bytes", &self.max_upload_bytes)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    redis_pool: Option<SharedRedisPool>,
    blog_repo: Option<Arc<dyn BlogRepository>>,
    destination_repo: Option<Arc<dyn DestinationRepository>>,
    partner_repo: Option<Arc<dyn PartnerRepository>>,
    employee_repo: Option<Arc<dyn EmployeeRepository>>,
    admin_repo: Option<Arc<dyn AdminRepository>>,
    contact_message_repo: Option<Arc<dyn ContactMessageRepository>>,
    session_store: Option<Arc<dyn SessionStore>>,
    image_store: Option<Arc<dyn ImageStore>>,
    token_service: Option<Arc<SessionTokenService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    max_upload_bytes: Option<usize>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn redis_pool(mut self, redis_pool: SharedRedisPool) -> Self {
        self.redis_pool = Some(redis_pool);
        self
    }

    pub fn blog_repo(mut self, repo: Arc<dyn BlogRepository>) -> Self {
        self.blog_repo = Some(repo);
        self
    }

    pub fn destination_repo(mut self, repo: Arc<dyn DestinationRepository>) -> Self {
        self.destination_repo = Some(repo);
        self
    }

    pub fn partner_repo(mut self, repo: Arc<dyn PartnerRepository>) -> Self {
        self.partner_repo = Some(repo);
        self
    }

    pub fn employee_repo(mut self, repo: Arc<dyn EmployeeRepository>) -> Self {
        self.employee_repo = Some(repo);
        self
    }

    pub fn admin_repo(mut self, repo: Arc<dyn AdminRepository>) -> Self {
        self.admin_repo = Some(repo);
        self
    }

    pub fn contact_message_repo(mut self, repo: Arc<dyn ContactMessageRepository>) -> Self {
        self.contact_message_repo = Some(repo);
        self
    }

    pub fn session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.session_store = Some(store);
        self
    }

    pub fn image_store(mut self, store: Arc<dyn ImageStore>) -> Self {
        self.image_store = Some(store);
        self
    }

    pub fn token_service(mut self, service: Arc<SessionTokenService>) -> Self {
        self.token_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn max_upload_bytes(mut self, bytes: usize) -> Self {
        self.max_upload_bytes = Some(bytes);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
        }

        Ok(ServiceContext {
            pool: self.pool,
            redis_pool: self.redis_pool,
            blog_repo: required(self.blog_repo, "blog_repo")?,
            destination_repo: required(self.destination_repo, "destination_repo")?,
            partner_repo: required(self.partner_repo, "partner_repo")?,
            employee_repo: required(self.employee_repo, "employee_repo")?,
            admin_repo: required(self.admin_repo, "admin_repo")?,
            contact_message_repo: required(self.contact_message_repo, "contact_message_repo")?,
            session_store: required(self.session_store, "session_store")?,
            image_store: required(self.image_store, "image_store")?,
            token_service: required(self.token_service, "token_service")?,
            password_service: PasswordService::new(),
            snowflake_generator: required(self.snowflake_generator, "snowflake_generator")?,
            max_upload_bytes: self.max_upload_bytes.unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
        })
    }
}
