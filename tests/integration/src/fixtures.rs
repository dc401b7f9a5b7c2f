//! Test fixtures and data generators
//!
//! Provides reusable test data and the client-side view of the response
//! envelope.

use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    format!(
        "{}{}",
        COUNTER.fetch_add(1, Ordering::SeqCst),
        uuid::Uuid::new_v4().simple()
    )
}

/// A phone number no other test uses; phones are unique per table
pub fn unique_phone() -> String {
    let n = uuid::Uuid::new_v4().as_u128() % 10_000_000;
    format!("+1 555 {n:07}")
}

/// Smallest byte string the upload check recognises as a PNG
pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

/// A PNG file part
pub fn png_part(file_name: &str) -> Part {
    Part::bytes(PNG_BYTES.to_vec())
        .file_name(file_name.to_string())
        .mime_str("image/png")
        .unwrap_or_else(|_| Part::bytes(PNG_BYTES.to_vec()))
}

// ============================================================================
// Envelope
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: ErrorData,
}

#[derive(Debug, Deserialize)]
pub struct ErrorData {
    pub code: String,
    pub message: String,
}

// ============================================================================
// Auth
// ============================================================================

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UnlockRequest {
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    pub token: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub is_valid: bool,
    pub is_locked: bool,
    pub employee: Option<EmployeeData>,
}

// ============================================================================
// Records
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RichTextData {
    pub details: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogData {
    pub id: String,
    pub title: String,
    pub description: RichTextData,
    pub image_url: Option<String>,
}

pub fn blog_form(title: &str, description: &str) -> Form {
    Form::new()
        .text("title", title.to_string())
        .text("description", description.to_string())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationData {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub popular_sites: Vec<String>,
    pub main_photo_url: String,
    pub gallery: Vec<String>,
}

/// Destination form with a main photo and `gallery` images
pub fn destination_form(name: &str, gallery: usize) -> Form {
    let mut form = Form::new()
        .text("name", name.to_string())
        .text("country", "Indonesia")
        .text("city", "Denpasar")
        .text("description", "<p>Island of the gods</p>")
        .text("areaKm2", "5780")
        .text("estimatedBudget", "1200.50")
        .text("popularSites", "Ubud")
        .text("popularSites", "Uluwatu")
        .part("mainPhotoUrl", png_part("main.png"));
    for i in 0..gallery {
        form = form.part("gallery[]", png_part(&format!("g{i}.png")));
    }
    form
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
}

pub fn partner_form(email: &str, phone: &str) -> Form {
    Form::new()
        .text("name", "Acme Tours")
        .text("email", email.to_string())
        .text("phone", phone.to_string())
        .text("address", "1 Harbour Rd")
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeData {
    pub id: String,
    pub first_name: String,
    pub email: String,
    pub profile_photo: Option<String>,
}

pub fn employee_form(email: &str, password: &str) -> Form {
    Form::new()
        .text("firstName", "Ada")
        .text("lastName", "Lovelace")
        .text("email", email.to_string())
        .text("phone", unique_phone())
        .text("password", password.to_string())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessageRequest {
    pub first_name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessageRequest {
    pub fn unique() -> Self {
        Self {
            first_name: "Sam".to_string(),
            email: format!("sam{}@example.com", unique_suffix()),
            message: "Do you run trips to Oman?".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessageData {
    pub id: String,
    pub status: String,
    pub priority: String,
}
