//! Admin model -> entity

use travel_core::entities::Admin;
use travel_core::value_objects::Snowflake;

use crate::models::AdminModel;

impl From<AdminModel> for Admin {
    fn from(model: AdminModel) -> Self {
        Admin {
            id: Snowflake::new(model.id),
            name: model.name,
            email: model.email,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
