//! # travel-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! ports for session and image storage.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Admin, Blog, BlogAuthor, ContactMessage, Destination, Employee, MessagePriority,
    MessageStatus, Partner, GALLERY_LIMIT,
};
pub use error::DomainError;
pub use traits::{
    AdminRepository, BlogRepository, ContactMessageRepository, DestinationRepository,
    EmployeeRepository, ImageStore, PartnerRepository, RepoResult, SessionRecord, SessionStore,
};
pub use value_objects::{
    ImageCategory, RichText, SessionEvent, SessionRole, SessionState, Snowflake,
    SnowflakeGenerator, SnowflakeParseError, UPLOADS_ROOT,
};
