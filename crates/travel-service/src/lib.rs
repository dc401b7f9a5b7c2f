//! # travel-service
//!
//! Application layer containing business logic, services, DTOs, and the
//! local image store.

pub mod dto;
pub mod services;
pub mod storage;

pub use services::{
    AuthService, BlogService, ContactMessageService, DestinationService, EmployeeService,
    PartnerService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
pub use storage::LocalImageStore;
