//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod blog;
pub mod contact_message;
pub mod context;
pub mod destination;
pub mod employee;
pub mod error;
mod images;
pub mod partner;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use auth::AuthService;
pub use blog::BlogService;
pub use contact_message::ContactMessageService;
pub use context::{ServiceContext, ServiceContextBuilder, DEFAULT_MAX_UPLOAD_BYTES};
pub use destination::DestinationService;
pub use employee::EmployeeService;
pub use error::{ServiceError, ServiceResult};
pub use partner::PartnerService;
