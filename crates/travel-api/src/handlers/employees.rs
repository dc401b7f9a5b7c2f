//! Employee handlers
//!
//! Staff accounts are managed by admins only.

use axum::extract::State;
use travel_service::{
    dto::{CreateEmployeeRequest, EmployeeResponse, UpdateEmployeeRequest},
    EmployeeService,
};

use crate::extractors::{AdminSession, IdPath, MultipartForm};
use crate::response::{ApiJson, ApiResult, Created};
use crate::state::AppState;

pub const PROFILE_PHOTO_FIELD: &str = "profilePhoto";

/// POST /employees
pub async fn create_employee(
    State(state): State<AppState>,
    _admin: AdminSession,
    mut form: MultipartForm<CreateEmployeeRequest>,
) -> ApiResult<Created<ApiJson<EmployeeResponse>>> {
    let photo = form.take_file(PROFILE_PHOTO_FIELD);
    let employee = EmployeeService::new(state.service_context())
        .create(form.fields, photo)
        .await?;
    Ok(Created(ApiJson::with_message(
        employee,
        "Employee created successfully",
    )))
}

/// GET /employees
pub async fn list_employees(
    State(state): State<AppState>,
    _admin: AdminSession,
) -> ApiResult<ApiJson<Vec<EmployeeResponse>>> {
    let employees = EmployeeService::new(state.service_context()).find_all().await?;
    Ok(ApiJson::new(employees))
}

/// GET /employees/{id}
pub async fn get_employee(
    State(state): State<AppState>,
    _admin: AdminSession,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<EmployeeResponse>> {
    let employee = EmployeeService::new(state.service_context()).find_one(id).await?;
    Ok(ApiJson::new(employee))
}

/// PUT /employees/{id}
pub async fn update_employee(
    State(state): State<AppState>,
    _admin: AdminSession,
    IdPath(id): IdPath,
    mut form: MultipartForm<UpdateEmployeeRequest>,
) -> ApiResult<ApiJson<EmployeeResponse>> {
    let photo = form.take_file(PROFILE_PHOTO_FIELD);
    let employee = EmployeeService::new(state.service_context())
        .update(id, form.fields, photo)
        .await?;
    Ok(ApiJson::with_message(employee, "Employee updated successfully"))
}

/// Delete the account and end its sessions
///
/// DELETE /employees/{id}
pub async fn delete_employee(
    State(state): State<AppState>,
    _admin: AdminSession,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<()>> {
    EmployeeService::new(state.service_context()).remove(id).await?;
    Ok(ApiJson::message("Employee deleted successfully"))
}
