//! Admin entity - back-office account that authors blog posts

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    pub id: Snowflake,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Admin {
    pub fn new(id: Snowflake, name: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            email,
            created_at: now,
            updated_at: now,
        }
    }
}
