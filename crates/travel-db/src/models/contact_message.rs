//! Contact message database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ContactMessageModel {
    pub id: i64,
    pub first_name: String,
    pub email: String,
    pub message: String,
    pub status: String,
    pub priority: String,
    pub created_at: DateTime<Utc>,
}
