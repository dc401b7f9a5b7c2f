//! Database models - SQLx-compatible structs for PostgreSQL tables

mod admin;
mod blog;
mod contact_message;
mod destination;
mod employee;
mod partner;

pub use admin::AdminModel;
pub use blog::BlogModel;
pub use contact_message::ContactMessageModel;
pub use destination::DestinationModel;
pub use employee::EmployeeModel;
pub use partner::PartnerModel;
