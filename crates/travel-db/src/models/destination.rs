//! Destination database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct DestinationModel {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub city: String,
    pub description: serde_json::Value,
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
