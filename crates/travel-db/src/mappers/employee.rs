//! Employee model -> entity

use travel_core::entities::Employee;
use travel_core::value_objects::Snowflake;

use crate::models::EmployeeModel;

impl From<EmployeeModel> for Employee {
    fn from(model: EmployeeModel) -> Self {
        Employee {
            id: Snowflake::new(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            phone: model.phone,
            address: model.address,
            profile_photo: model.profile_photo,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
