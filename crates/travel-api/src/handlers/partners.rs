//! Partner handlers

use axum::extract::State;
use travel_service::{
    dto::{CreatePartnerRequest, PartnerResponse, UpdatePartnerRequest},
    PartnerService,
};

use crate::extractors::{ActiveSession, IdPath, MultipartForm};
use crate::response::{ApiJson, ApiResult, Created};
use crate::state::AppState;

pub const PARTNER_IMAGE_FIELD: &str = "partnerImg";

/// POST /partners
pub async fn create_partner(
    State(state): State<AppState>,
    _session: ActiveSession,
    mut form: MultipartForm<CreatePartnerRequest>,
) -> ApiResult<Created<ApiJson<PartnerResponse>>> {
    let image = form.take_file(PARTNER_IMAGE_FIELD);
    let partner = PartnerService::new(state.service_context())
        .create(form.fields, image)
        .await?;
    Ok(Created(ApiJson::with_message(
        partner,
        "Partner created successfully",
    )))
}

/// GET /partners
pub async fn list_partners(
    State(state): State<AppState>,
) -> ApiResult<ApiJson<Vec<PartnerResponse>>> {
    let partners = PartnerService::new(state.service_context()).find_all().await?;
    Ok(ApiJson::new(partners))
}

/// GET /partners/{id}
pub async fn get_partner(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<PartnerResponse>> {
    let partner = PartnerService::new(state.service_context()).find_one(id).await?;
    Ok(ApiJson::new(partner))
}

/// PUT /partners/{id}
pub async fn update_partner(
    State(state): State<AppState>,
    _session: ActiveSession,
    IdPath(id): IdPath,
    mut form: MultipartForm<UpdatePartnerRequest>,
) -> ApiResult<ApiJson<PartnerResponse>> {
    let image = form.take_file(PARTNER_IMAGE_FIELD);
    let partner = PartnerService::new(state.service_context())
        .update(id, form.fields, image)
        .await?;
    Ok(ApiJson::with_message(partner, "Partner updated successfully"))
}

/// DELETE /partners/{id}
pub async fn delete_partner(
    State(state): State<AppState>,
    _session: ActiveSession,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<()>> {
    PartnerService::new(state.service_context()).remove(id).await?;
    Ok(ApiJson::message("Partner deleted successfully"))
}
