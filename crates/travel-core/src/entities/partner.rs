//! Partner entity - a company the agency works with

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partner {
    pub id: Snowflake,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Partner {
    pub fn new(id: Snowflake, name: String, email: String, phone: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            email,
            phone,
            address: String::new(),
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Point the partner at a new logo, returning the path it replaced
    pub fn replace_image(&mut self, path: String) -> Option<String> {
        self.updated_at = Utc::now();
        self.image_url.replace(path)
    }
}
