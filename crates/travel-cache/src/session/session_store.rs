//! Login sessions in Redis.
//!
//! Each record lives at `session:<id>` with a TTL matching its expiry. A
//! per-principal set (`principal_sessions:<role>:<id>`) tracks live session
//! IDs so every session of a deleted employee can be revoked at once.

use async_trait::async_trait;
use travel_core::traits::{RepoResult, SessionRecord, SessionStore};
use travel_core::{DomainError, SessionRole, Snowflake};

use crate::pool::{RedisPool, RedisPoolError};

const SESSION_PREFIX: &str = "session:";
const PRINCIPAL_PREFIX: &str = "principal_sessions:";

impl From<RedisPoolError> for DomainError {
    fn from(e: RedisPoolError) -> Self {
        DomainError::CacheError(e.to_string())
    }
}

#[derive(Clone)]
pub struct RedisSessionStore {
    pool: RedisPool,
}

impl RedisSessionStore {
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    fn key(session_id: &str) -> String {
        format!("{SESSION_PREFIX}{session_id}")
    }

    fn principal_key(role: SessionRole, principal_id: Snowflake) -> String {
        format!("{PRINCIPAL_PREFIX}{role}:{principal_id}")
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn save(&self, record: &SessionRecord) -> RepoResult<()> {
        let ttl = record.remaining_ttl_secs();
        self.pool
            .put_json(&Self::key(&record.session_id), record, ttl)
            .await?;
        self.pool
            .index_add(
                &Self::principal_key(record.role, record.principal_id),
                &record.session_id,
                ttl,
            )
            .await?;

        tracing::debug!(
            session_id = %record.session_id,
            principal_id = %record.principal_id,
            role = %record.role,
            state = record.state.as_str(),
            "Stored session"
        );

        Ok(())
    }

    async fn update(&self, record: &SessionRecord) -> RepoResult<bool> {
        let updated = self
            .pool
            .replace_json(
                &Self::key(&record.session_id),
                record,
                record.remaining_ttl_secs(),
            )
            .await?;

        if !updated {
            tracing::debug!(session_id = %record.session_id, "Session gone before update");
        }
        Ok(updated)
    }

    async fn get(&self, session_id: &str) -> RepoResult<Option<SessionRecord>> {
        Ok(self.pool.get_json(&Self::key(session_id)).await?)
    }

    async fn delete(&self, session_id: &str) -> RepoResult<()> {
        if let Some(record) = self.get(session_id).await? {
            self.pool
                .index_remove(
                    &Self::principal_key(record.role, record.principal_id),
                    session_id,
                )
                .await?;
        }

        if self.pool.delete(&[Self::key(session_id)]).await? > 0 {
            tracing::debug!(session_id = %session_id, "Deleted session");
        }

        Ok(())
    }

    async fn delete_for_principal(
        &self,
        role: SessionRole,
        principal_id: Snowflake,
    ) -> RepoResult<u64> {
        let index = Self::principal_key(role, principal_id);
        let keys: Vec<String> = self
            .pool
            .index_members(&index)
            .await?
            .iter()
            .map(|id| Self::key(id))
            .collect();

        let removed = self.pool.delete(&keys).await?;
        self.pool.delete(&[index]).await?;

        tracing::info!(
            principal_id = %principal_id,
            role = %role,
            count = removed,
            "Revoked all sessions for principal"
        );

        Ok(removed)
    }
}
