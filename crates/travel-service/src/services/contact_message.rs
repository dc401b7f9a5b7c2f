//! Contact message service

use tracing::{info, instrument};
use travel_core::{ContactMessage, Snowflake};

use crate::dto::{
    ContactMessageResponse, CreateContactMessageRequest, UpdateContactMessageStatusRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

pub struct ContactMessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ContactMessageService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record an enquiry from the public site; status and priority start
    /// at their defaults whatever the client sends
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn create(
        &self,
        request: CreateContactMessageRequest,
    ) -> ServiceResult<ContactMessageResponse> {
        let message = ContactMessage::new(
            self.ctx.generate_id(),
            request.first_name,
            request.email,
            request.message,
        );
        self.ctx.contact_message_repo().create(&message).await?;

        info!(message_id = %message.id, "Contact message received");
        Ok(ContactMessageResponse::from(message))
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> ServiceResult<Vec<ContactMessageResponse>> {
        let messages = self.ctx.contact_message_repo().find_all().await?;
        Ok(messages.iter().map(ContactMessageResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn find_one(&self, id: Snowflake) -> ServiceResult<ContactMessageResponse> {
        self.load(id).await.map(ContactMessageResponse::from)
    }

    #[instrument(skip(self, request))]
    pub async fn update_status(
        &self,
        id: Snowflake,
        request: UpdateContactMessageStatusRequest,
    ) -> ServiceResult<ContactMessageResponse> {
        let mut message = self.load(id).await?;
        message.status = request.status.unwrap_or(message.status);
        message.priority = request.priority.unwrap_or(message.priority);

        self.ctx
            .contact_message_repo()
            .update_status(id, message.status, message.priority)
            .await?;

        info!(
            message_id = %id,
            status = message.status.as_str(),
            priority = message.priority.as_str(),
            "Contact message triaged"
        );
        Ok(ContactMessageResponse::from(message))
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: Snowflake) -> ServiceResult<()> {
        self.ctx.contact_message_repo().delete(id).await?;
        info!(message_id = %id, "Contact message deleted");
        Ok(())
    }

    async fn load(&self, id: Snowflake) -> ServiceResult<ContactMessage> {
        self.ctx
            .contact_message_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("ContactMessage", id.to_string()))
    }
}
