//! Blog model -> entity

use travel_core::entities::{Blog, BlogAuthor};
use travel_core::value_objects::{RichText, Snowflake};

use crate::models::BlogModel;

impl From<BlogModel> for Blog {
    fn from(model: BlogModel) -> Self {
        // the projection only exists when the join found the admin
        let author = match (model.author_id, model.author_name, model.author_email) {
            (Some(id), Some(name), Some(email)) => Some(BlogAuthor {
                id: Snowflake::new(id),
                name,
                email,
            }),
            _ => None,
        };

        Blog {
            id: Snowflake::new(model.id),
            title: model.title,
            description: RichText::from_json(&model.description),
            image_url: model.image_url,
            author_id: model.author_id.map(Snowflake::new),
            author,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
