//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs
//! - The uploaded-file type multipart handlers pass to services

pub mod mappers;
pub mod requests;
pub mod responses;
pub mod upload;

pub use requests::{
    CreateBlogRequest, CreateContactMessageRequest, CreateDestinationRequest,
    CreateEmployeeRequest, CreatePartnerRequest, LoginRequest, UnlockRequest, UpdateBlogRequest,
    UpdateContactMessageStatusRequest, UpdateDestinationRequest, UpdateEmployeeRequest,
    UpdatePartnerRequest,
};

pub use responses::{
    AdminResponse, ApiResponse, AuthResponse, BlogAuthorResponse, BlogResponse,
    ContactMessageResponse, DestinationResponse, EmployeeResponse, HealthChecks, HealthResponse,
    PartnerResponse, ProfileResponse, ReadinessResponse, SessionStatusResponse,
};

pub use upload::ImageUpload;
