//! Destination handlers
//!
//! A destination carries one main photo (`mainPhotoUrl`) and a gallery
//! (`gallery` or `gallery[]`, repeated). On update, `keepImages` lists the
//! gallery paths to retain.

use axum::extract::State;
use travel_service::{
    dto::{CreateDestinationRequest, DestinationResponse, UpdateDestinationRequest},
    DestinationService,
};

use crate::extractors::{ActiveSession, IdPath, MultipartForm};
use crate::response::{ApiJson, ApiResult, Created};
use crate::state::AppState;

pub const MAIN_PHOTO_FIELD: &str = "mainPhotoUrl";
pub const GALLERY_FIELD: &str = "gallery";

/// POST /destinations
pub async fn create_destination(
    State(state): State<AppState>,
    _session: ActiveSession,
    mut form: MultipartForm<CreateDestinationRequest>,
) -> ApiResult<Created<ApiJson<DestinationResponse>>> {
    let main_photo = form.take_file(MAIN_PHOTO_FIELD);
    let gallery = form.take_files(GALLERY_FIELD);

    let destination = DestinationService::new(state.service_context())
        .create(form.fields, main_photo, gallery)
        .await?;
    Ok(Created(ApiJson::with_message(
        destination,
        "Destination created successfully",
    )))
}

/// GET /destinations
pub async fn list_destinations(
    State(state): State<AppState>,
) -> ApiResult<ApiJson<Vec<DestinationResponse>>> {
    let destinations = DestinationService::new(state.service_context())
        .find_all()
        .await?;
    Ok(ApiJson::new(destinations))
}

/// Destinations shown on the public site
///
/// GET /destinations/active
pub async fn list_active_destinations(
    State(state): State<AppState>,
) -> ApiResult<ApiJson<Vec<DestinationResponse>>> {
    let destinations = DestinationService::new(state.service_context())
        .find_active()
        .await?;
    Ok(ApiJson::new(destinations))
}

/// GET /destinations/{id}
pub async fn get_destination(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<DestinationResponse>> {
    let destination = DestinationService::new(state.service_context())
        .find_one(id)
        .await?;
    Ok(ApiJson::new(destination))
}

/// PUT /destinations/{id}
pub async fn update_destination(
    State(state): State<AppState>,
    _session: ActiveSession,
    IdPath(id): IdPath,
    mut form: MultipartForm<UpdateDestinationRequest>,
) -> ApiResult<ApiJson<DestinationResponse>> {
    let main_photo = form.take_file(MAIN_PHOTO_FIELD);
    let gallery = form.take_files(GALLERY_FIELD);

    let destination = DestinationService::new(state.service_context())
        .update(id, form.fields, main_photo, gallery)
        .await?;
    Ok(ApiJson::with_message(
        destination,
        "Destination updated successfully",
    ))
}

/// Delete the row and every image it owns
///
/// DELETE /destinations/{id}
pub async fn delete_destination(
    State(state): State<AppState>,
    _session: ActiveSession,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<()>> {
    DestinationService::new(state.service_context())
        .remove(id)
        .await?;
    Ok(ApiJson::message("Destination deleted successfully"))
}

/// PATCH /destinations/{id}/soft-delete
pub async fn soft_delete_destination(
    State(state): State<AppState>,
    _session: ActiveSession,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<DestinationResponse>> {
    let destination = DestinationService::new(state.service_context())
        .soft_delete(id)
        .await?;
    Ok(ApiJson::with_message(destination, "Destination deactivated"))
}

/// PATCH /destinations/{id}/restore
pub async fn restore_destination(
    State(state): State<AppState>,
    _session: ActiveSession,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<DestinationResponse>> {
    let destination = DestinationService::new(state.service_context())
        .restore(id)
        .await?;
    Ok(ApiJson::with_message(destination, "Destination restored"))
}
