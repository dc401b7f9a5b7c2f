//! Blog entity - a post written by an admin account

use chrono::{DateTime, Utc};

use crate::value_objects::{RichText, Snowflake};

/// Author projection joined from the admin table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogAuthor {
    pub id: Snowflake,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Blog {
    pub id: Snowflake,
    pub title: String,
    pub description: RichText,
    pub image_url: Option<String>,
    pub author_id: Option<Snowflake>,
    pub author: Option<BlogAuthor>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Blog {
    pub fn new(id: Snowflake, title: String, description: RichText) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            description,
            image_url: None,
            author_id: None,
            author: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }

    pub fn set_description(&mut self, description: RichText) {
        self.description = description;
        self.updated_at = Utc::now();
    }

    /// Point the post at a new image, returning the path it replaced
    pub fn replace_image(&mut self, path: String) -> Option<String> {
        self.updated_at = Utc::now();
        self.image_url.replace(path)
    }
}
