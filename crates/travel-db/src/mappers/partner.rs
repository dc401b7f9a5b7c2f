//! Partner model -> entity

use travel_core::entities::Partner;
use travel_core::value_objects::Snowflake;

use crate::models::PartnerModel;

impl From<PartnerModel> for Partner {
    fn from(model: PartnerModel) -> Self {
        Partner {
            id: Snowflake::new(model.id),
            name: model.name,
            email: model.email,
            phone: model.phone,
            address: model.address,
            image_url: model.image_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
