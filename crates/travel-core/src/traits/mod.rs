//! Ports implemented by the infrastructure crates

mod repositories;
mod session;
mod storage;

pub use repositories::{
    AdminRepository, BlogRepository, ContactMessageRepository, DestinationRepository,
    EmployeeRepository, PartnerRepository, RepoResult,
};
pub use session::{SessionRecord, SessionStore};
pub use storage::ImageStore;
