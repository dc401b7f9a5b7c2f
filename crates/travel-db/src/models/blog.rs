//! Blog database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Blog row joined with its author (all author columns null when unset)
#[derive(Debug, Clone, FromRow)]
pub struct BlogModel {
    pub id: i64,
    pub title: String,
    pub description: serde_json::Value,
    pub image_url: Option<String>,
    pub author_id: Option<i64>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
