//! Session record and the store that keeps it

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::repositories::RepoResult;
use crate::value_objects::{SessionRole, SessionState, Snowflake};

/// Server-side half of a login; the client only holds a signed token naming it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session_id: String,
    pub principal_id: Snowflake,
    pub role: SessionRole,
    pub state: SessionState,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }

    /// Whole seconds until expiry, never less than one while still alive
    pub fn remaining_ttl_secs(&self) -> u64 {
        let secs = (self.expires_at - Utc::now()).num_seconds();
        secs.max(1) as u64
    }
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store a new record at login; it expires at `record.expires_at`
    async fn save(&self, record: &SessionRecord) -> RepoResult<()>;

    /// Overwrite a record that still exists. Returns false, writing nothing,
    /// once the session has been deleted or has expired.
    async fn update(&self, record: &SessionRecord) -> RepoResult<bool>;

    async fn get(&self, session_id: &str) -> RepoResult<Option<SessionRecord>>;

    async fn delete(&self, session_id: &str) -> RepoResult<()>;

    /// Drop every session of one principal, returning how many were removed
    async fn delete_for_principal(&self, role: SessionRole, principal_id: Snowflake)
        -> RepoResult<u64>;
}
