//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in travel-core.

mod admin;
mod blog;
mod contact_message;
mod destination;
mod employee;
mod error;
mod partner;

pub use admin::PgAdminRepository;
pub use blog::PgBlogRepository;
pub use contact_message::PgContactMessageRepository;
pub use destination::PgDestinationRepository;
pub use employee::PgEmployeeRepository;
pub use partner::PgPartnerRepository;
