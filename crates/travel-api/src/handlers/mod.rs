//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod auth;
pub mod blogs;
pub mod contact_messages;
pub mod destinations;
pub mod employees;
pub mod health;
pub mod partners;
