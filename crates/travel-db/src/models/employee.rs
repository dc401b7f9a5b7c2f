//! Employee database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Employee row without the password hash, which is fetched separately
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeModel {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub profile_photo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
