//! PostgreSQL implementation of ContactMessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use travel_core::entities::{ContactMessage, MessagePriority, MessageStatus};
use travel_core::error::DomainError;
use travel_core::traits::{ContactMessageRepository, RepoResult};
use travel_core::value_objects::Snowflake;

use crate::models::ContactMessageModel;

use super::error::{duplicate_id, map_db_error, map_write_error};

#[derive(Clone)]
pub struct PgContactMessageRepository {
    pool: PgPool,
}

impl PgContactMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactMessageRepository for PgContactMessageRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<ContactMessage>> {
        let result = sqlx::query_as::<_, ContactMessageModel>(
            r"
            SELECT id, first_name, email, message, status, priority, created_at
            FROM contact_messages
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ContactMessage::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<ContactMessage>> {
        let results = sqlx::query_as::<_, ContactMessageModel>(
            r"
            SELECT id, first_name, email, message, status, priority, created_at
            FROM contact_messages
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ContactMessage::from).collect())
    }

    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn create(&self, message: &ContactMessage) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO contact_messages (id, first_name, email, message, status, priority, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(message.id.into_inner())
        .bind(&message.first_name)
        .bind(&message.email)
        .bind(&message.message)
        .bind(message.status.as_str())
        .bind(message.priority.as_str())
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, duplicate_id))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_status(
        &self,
        id: Snowflake,
        status: MessageStatus,
        priority: MessagePriority,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            "UPDATE contact_messages SET status = $2, priority = $3 WHERE id = $1",
        )
        .bind(id.into_inner())
        .bind(status.as_str())
        .bind(priority.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, duplicate_id))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ContactMessageNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ContactMessageNotFound(id));
        }

        Ok(())
    }
}
