//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;
use travel_core::{MessagePriority, MessageStatus, RichText, SessionRole};

// ============================================================================
// Common Response Types
// ============================================================================

/// Envelope every successful API response is wrapped in
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: Some(message.into()),
        }
    }
}

// ============================================================================
// Blog Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogAuthorResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub id: String,
    pub title: String,
    pub description: RichText,
    pub image_url: Option<String>,
    pub author_id: Option<String>,
    pub author: Option<BlogAuthorResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Destination Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationResponse {
    pub id: String,
    pub name: String,
    pub country: String,
    pub city: String,
    pub description: RichText,
    pub visa_requirements: String,
    pub language: String,
    pub currency_used: String,
    pub area_km2: f64,
    pub estimated_budget: f64,
    pub is_active: bool,
    pub popular_sites: Vec<String>,
    pub highlights: Vec<String>,
    pub main_photo_url: String,
    pub gallery: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Partner / Employee / Admin Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Employee profile; never carries the password hash
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub profile_photo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Contact Message Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessageResponse {
    pub id: String,
    pub first_name: String,
    pub email: String,
    pub message: String,
    pub status: MessageStatus,
    pub priority: MessagePriority,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Whoever a session belongs to
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ProfileResponse {
    Employee(EmployeeResponse),
    Admin(AdminResponse),
}

/// Result of a successful login
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub role: SessionRole,
    pub profile: ProfileResponse,
}

/// Session check as the dashboard consumes it
///
/// An invalid session is always reported as all-false with a null
/// `employee`; there is no partially valid state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub is_valid: bool,
    pub is_locked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<SessionRole>,
    pub employee: Option<EmployeeResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<AdminResponse>,
}

impl SessionStatusResponse {
    pub fn invalid() -> Self {
        Self {
            is_valid: false,
            is_locked: false,
            role: None,
            employee: None,
            admin: None,
        }
    }

    pub fn active(profile: ProfileResponse, is_locked: bool) -> Self {
        let (role, employee, admin) = match profile {
            ProfileResponse::Employee(e) => (SessionRole::Employee, Some(e), None),
            ProfileResponse::Admin(a) => (SessionRole::Admin, None, Some(a)),
        };
        Self {
            is_valid: true,
            is_locked,
            role: Some(role),
            employee,
            admin,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
    pub storage: String,
}

fn health_label(ok: bool) -> String {
    if ok { "healthy" } else { "unhealthy" }.to_string()
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, redis_healthy: bool, storage_healthy: bool) -> Self {
        let all_healthy = database_healthy && redis_healthy && storage_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: health_label(database_healthy),
                redis: health_label(redis_healthy),
                storage: health_label(storage_healthy),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
