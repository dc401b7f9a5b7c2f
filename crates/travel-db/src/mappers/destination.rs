//! Destination model -> entity

use travel_core::entities::Destination;
use travel_core::value_objects::{RichText, Snowflake};

use crate::models::DestinationModel;

impl From<DestinationModel> for Destination {
    fn from(model: DestinationModel) -> Self {
        Destination {
            id: Snowflake::new(model.id),
            name: model.name,
            country: model.country,
            city: model.city,
            description: RichText::from_json(&model.description),
            visa_requirements: model.visa_requirements,
            language: model.language,
            currency_used: model.currency_used,
            area_km2: model.area_km2,
            estimated_budget: model.estimated_budget,
            is_active: model.is_active,
            popular_sites: model.popular_sites,
            highlights: model.highlights,
            main_photo_url: model.main_photo_url,
            gallery: model.gallery,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
