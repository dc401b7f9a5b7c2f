//! Domain entities - core business objects

mod admin;
mod blog;
mod contact_message;
mod destination;
mod employee;
mod partner;

pub use admin::Admin;
pub use blog::{Blog, BlogAuthor};
pub use contact_message::{ContactMessage, MessagePriority, MessageStatus};
pub use destination::{Destination, GALLERY_LIMIT};
pub use employee::Employee;
pub use partner::Partner;
