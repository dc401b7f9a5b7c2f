//! Employee entity - dashboard staff account

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Employee profile; the password hash lives only in the repository layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: Snowflake,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub profile_photo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    pub fn new(
        id: Snowflake,
        first_name: String,
        last_name: String,
        email: String,
        phone: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            first_name,
            last_name,
            email,
            phone,
            address: String::new(),
            profile_photo: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    /// Point the profile at a new photo, returning the path it replaced
    pub fn replace_photo(&mut self, path: String) -> Option<String> {
        self.updated_at = Utc::now();
        self.profile_photo.replace(path)
    }
}
