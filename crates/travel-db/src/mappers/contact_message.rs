//! Contact message model -> entity

use travel_core::entities::{ContactMessage, MessagePriority, MessageStatus};
use travel_core::value_objects::Snowflake;

use crate::models::ContactMessageModel;

impl From<ContactMessageModel> for ContactMessage {
    fn from(model: ContactMessageModel) -> Self {
        ContactMessage {
            id: Snowflake::new(model.id),
            first_name: model.first_name,
            email: model.email,
            message: model.message,
            status: model.status.parse::<MessageStatus>().unwrap_or_default(),
            priority: model.priority.parse::<MessagePriority>().unwrap_or_default(),
            created_at: model.created_at,
        }
    }
}
