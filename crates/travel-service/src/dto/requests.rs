//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Multipart forms arrive as strings, so numeric, boolean and list fields
//! go through the lenient deserializers in [`lenient`].

use serde::Deserialize;
use travel_common::validate_phone;
use travel_core::{MessagePriority, MessageStatus};
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Employee or admin login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Unlock a locked session by re-entering the password
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UnlockRequest {
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// Blog Requests
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    /// HTML body; wrapped as `{details}` before storage
    #[serde(default)]
    pub description: Option<String>,

    /// Admin ID (Snowflake as string)
    #[serde(default)]
    pub author_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    pub description: Option<String>,

    pub author_id: Option<String>,
}

// ============================================================================
// Destination Requests
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDestinationRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[serde(default)]
    pub country: Option<String>,

    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub visa_requirements: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub currency_used: Option<String>,

    #[serde(default, deserialize_with = "lenient::opt_f64")]
    #[validate(range(min = 0.0, message = "Area must not be negative"))]
    pub area_km2: Option<f64>,

    #[serde(default, deserialize_with = "lenient::opt_f64")]
    #[validate(range(min = 0.0, message = "Budget must not be negative"))]
    pub estimated_budget: Option<f64>,

    #[serde(default, deserialize_with = "lenient::opt_bool")]
    pub is_active: Option<bool>,

    #[serde(default, deserialize_with = "lenient::string_list")]
    pub popular_sites: Vec<String>,

    #[serde(default, deserialize_with = "lenient::string_list")]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDestinationRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,

    pub country: Option<String>,

    pub city: Option<String>,

    pub description: Option<String>,

    pub visa_requirements: Option<String>,

    pub language: Option<String>,

    pub currency_used: Option<String>,

    #[serde(default, deserialize_with = "lenient::opt_f64")]
    #[validate(range(min = 0.0, message = "Area must not be negative"))]
    pub area_km2: Option<f64>,

    #[serde(default, deserialize_with = "lenient::opt_f64")]
    #[validate(range(min = 0.0, message = "Budget must not be negative"))]
    pub estimated_budget: Option<f64>,

    #[serde(default, deserialize_with = "lenient::opt_bool")]
    pub is_active: Option<bool>,

    #[serde(default, deserialize_with = "lenient::opt_string_list")]
    pub popular_sites: Option<Vec<String>>,

    #[serde(default, deserialize_with = "lenient::opt_string_list")]
    pub highlights: Option<Vec<String>>,

    /// Existing gallery paths to retain; absent keeps the whole gallery
    #[serde(default, deserialize_with = "lenient::opt_string_list")]
    pub keep_images: Option<Vec<String>>,
}

// ============================================================================
// Partner Requests
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePartnerRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(custom(function = "validate_phone"))]
    pub phone: String,

    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePartnerRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    pub address: Option<String>,
}

// ============================================================================
// Employee Requests
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,

    #[validate(length(max = 100, message = "Last name must be at most 100 characters"))]
    #[serde(default)]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(custom(function = "validate_phone"))]
    pub phone: String,

    #[serde(default)]
    pub address: Option<String>,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 100, message = "Last name must be at most 100 characters"))]
    pub last_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    pub address: Option<String>,

    /// New password; blank leaves the current one
    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    #[serde(default, deserialize_with = "lenient::opt_nonblank_string")]
    pub password: Option<String>,
}

// ============================================================================
// Contact Message Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactMessageRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 5000, message = "Message must be 1-5000 characters"))]
    pub message: String,
}

/// Triage a contact message; omitted fields keep their current value
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateContactMessageStatusRequest {
    pub status: Option<MessageStatus>,
    pub priority: Option<MessagePriority>,
}

/// Deserializers that accept both JSON-native values and form strings
pub mod lenient {
    use serde::{de::Error, Deserialize, Deserializer};
    use serde_json::Value;

    fn blank(s: &str) -> bool {
        s.trim().is_empty()
    }

    pub fn opt_f64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        match Option::<Value>::deserialize(d)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => Ok(n.as_f64()),
            Some(Value::String(s)) if blank(&s) => Ok(None),
            Some(Value::String(s)) => match s.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(Some(v)),
                _ => Err(D::Error::custom(format!("expected a number, got {s:?}"))),
            },
            Some(other) => Err(D::Error::custom(format!("expected a number, got {other}"))),
        }
    }

    /// Empty form inputs count as absent
    pub fn opt_nonblank_string<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(Option::<String>::deserialize(d)?.filter(|s| !blank(s)))
    }

    pub fn opt_bool<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
        match Option::<Value>::deserialize(d)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(b)),
            Some(Value::String(s)) => match s.trim().to_lowercase().as_str() {
                "" => Ok(None),
                "true" | "1" | "on" | "yes" => Ok(Some(true)),
                "false" | "0" | "off" | "no" => Ok(Some(false)),
                _ => Err(D::Error::custom(format!("expected a boolean, got {s:?}"))),
            },
            Some(other) => Err(D::Error::custom(format!("expected a boolean, got {other}"))),
        }
    }

    /// A JSON array, a string holding a JSON array, or a single plain string
    pub fn opt_string_list<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<Vec<String>>, D::Error> {
        match Option::<Value>::deserialize(d)? {
            None | Some(Value::Null) => Ok(None),
            Some(value) => to_list(value).map(Some).map_err(D::Error::custom),
        }
    }

    pub fn string_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        Ok(opt_string_list(d)?.unwrap_or_default())
    }

    fn to_list(value: Value) -> Result<Vec<String>, String> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) if blank(&s) => None,
                    Value::String(s) => Some(Ok(s)),
                    Value::Null => None,
                    other => Some(Err(format!("expected a string, got {other}"))),
                })
                .collect(),
            Value::String(s) if blank(&s) => Ok(Vec::new()),
            Value::String(s) if s.trim_start().starts_with('[') => {
                let parsed: Value = serde_json::from_str(&s).map_err(|e| e.to_string())?;
                to_list(parsed)
            }
            Value::String(s) => Ok(vec![s]),
            other => Err(format!("expected a list, got {other}")),
        }
    }
}
