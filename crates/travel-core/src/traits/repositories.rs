//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Mutations on a missing row report the
//! matching `*NotFound` error rather than silently succeeding.

use async_trait::async_trait;

use crate::entities::{Admin, Blog, ContactMessage, Destination, Employee, Partner};
use crate::entities::{MessagePriority, MessageStatus};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Blog Repository
// ============================================================================

#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Find a post by ID, with its author projection
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Blog>>;

    /// All posts, newest first
    async fn find_all(&self) -> RepoResult<Vec<Blog>>;

    async fn create(&self, blog: &Blog) -> RepoResult<()>;

    async fn update(&self, blog: &Blog) -> RepoResult<()>;

    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Destination Repository
// ============================================================================

#[async_trait]
pub trait DestinationRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Destination>>;

    /// All destinations, newest first
    async fn find_all(&self) -> RepoResult<Vec<Destination>>;

    /// Only destinations with `is_active = true`
    async fn find_active(&self) -> RepoResult<Vec<Destination>>;

    async fn create(&self, destination: &Destination) -> RepoResult<()>;

    async fn update(&self, destination: &Destination) -> RepoResult<()>;

    /// Toggle visibility without touching anything else
    async fn set_active(&self, id: Snowflake, active: bool) -> RepoResult<()>;

    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Partner Repository
// ============================================================================

#[async_trait]
pub trait PartnerRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Partner>>;

    async fn find_all(&self) -> RepoResult<Vec<Partner>>;

    async fn create(&self, partner: &Partner) -> RepoResult<()>;

    async fn update(&self, partner: &Partner) -> RepoResult<()>;

    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Employee Repository
// ============================================================================

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Employee>>;

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>>;

    async fn find_all(&self) -> RepoResult<Vec<Employee>>;

    async fn create(&self, employee: &Employee, password_hash: &str) -> RepoResult<()>;

    async fn update(&self, employee: &Employee) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    async fn update_password(&self, id: Snowflake, password_hash: &str) -> RepoResult<()>;

    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Admin Repository
// ============================================================================

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Admin>>;

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Admin>>;

    async fn create(&self, admin: &Admin, password_hash: &str) -> RepoResult<()>;

    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;
}

// ============================================================================
// Contact Message Repository
// ============================================================================

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<ContactMessage>>;

    /// All messages, newest first
    async fn find_all(&self) -> RepoResult<Vec<ContactMessage>>;

    async fn create(&self, message: &ContactMessage) -> RepoResult<()>;

    async fn update_status(
        &self,
        id: Snowflake,
        status: MessageStatus,
        priority: MessagePriority,
    ) -> RepoResult<()>;

    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}
