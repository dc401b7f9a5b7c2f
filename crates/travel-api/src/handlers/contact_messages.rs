//! Contact message handlers
//!
//! Anyone may submit the contact form; reading and triage need a session.

use axum::extract::State;
use travel_service::{
    dto::{ContactMessageResponse, CreateContactMessageRequest, UpdateContactMessageStatusRequest},
    ContactMessageService,
};

use crate::extractors::{ActiveSession, IdPath, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created};
use crate::state::AppState;

/// POST /contact-messages
pub async fn create_contact_message(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateContactMessageRequest>,
) -> ApiResult<Created<ApiJson<ContactMessageResponse>>> {
    let message = ContactMessageService::new(state.service_context())
        .create(request)
        .await?;
    Ok(Created(ApiJson::with_message(message, "Message sent successfully")))
}

/// GET /contact-messages
pub async fn list_contact_messages(
    State(state): State<AppState>,
    _session: ActiveSession,
) -> ApiResult<ApiJson<Vec<ContactMessageResponse>>> {
    let messages = ContactMessageService::new(state.service_context())
        .find_all()
        .await?;
    Ok(ApiJson::new(messages))
}

/// GET /contact-messages/{id}
pub async fn get_contact_message(
    State(state): State<AppState>,
    _session: ActiveSession,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<ContactMessageResponse>> {
    let message = ContactMessageService::new(state.service_context())
        .find_one(id)
        .await?;
    Ok(ApiJson::new(message))
}

/// PATCH /contact-messages/{id}/status
pub async fn update_contact_message_status(
    State(state): State<AppState>,
    _session: ActiveSession,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateContactMessageStatusRequest>,
) -> ApiResult<ApiJson<ContactMessageResponse>> {
    let message = ContactMessageService::new(state.service_context())
        .update_status(id, request)
        .await?;
    Ok(ApiJson::with_message(message, "Message status updated"))
}

/// DELETE /contact-messages/{id}
pub async fn delete_contact_message(
    State(state): State<AppState>,
    _session: ActiveSession,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<()>> {
    ContactMessageService::new(state.service_context())
        .remove(id)
        .await?;
    Ok(ApiJson::message("Message deleted successfully"))
}
