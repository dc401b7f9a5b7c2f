//! deadpool-redis pool with the handful of commands the session store needs:
//! JSON values with an expiry, and string sets used as secondary indexes.

use std::sync::Arc;

use deadpool_redis::{Config, Connection, Pool, Runtime};
use redis::AsyncCommands;
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug, Clone)]
pub struct RedisPoolConfig {
    /// e.g. `redis://localhost:6379`
    pub url: String,
    pub max_connections: usize,
}

impl From<&travel_common::RedisConfig> for RedisPoolConfig {
    fn from(config: &travel_common::RedisConfig) -> Self {
        Self {
            url: config.url.clone(),
            max_connections: config.max_connections as usize,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RedisPoolError {
    #[error("Failed to create Redis pool: {0}")]
    CreatePool(String),

    #[error("No Redis connection available: {0}")]
    Checkout(#[from] deadpool_redis::PoolError),

    #[error("Redis command failed: {0}")]
    Command(#[from] redis::RedisError),

    #[error("Stored value is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("TTL out of range: {0}")]
    InvalidTtl(u64),
}

pub type RedisResult<T> = Result<T, RedisPoolError>;

#[derive(Clone)]
pub struct RedisPool {
    pool: Pool,
}

/// Handed to the readiness probe through the service context
pub type SharedRedisPool = Arc<RedisPool>;

impl std::fmt::Debug for RedisPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisPool")
            .field("status", &self.pool.status())
            .finish()
    }
}

impl RedisPool {
    pub fn new(config: RedisPoolConfig) -> RedisResult<Self> {
        let pool = Config::from_url(&config.url)
            .builder()
            .map_err(|e| RedisPoolError::CreatePool(e.to_string()))?
            .max_size(config.max_connections)
            .runtime(Runtime::Tokio1)
            .build()
            .map_err(|e| RedisPoolError::CreatePool(e.to_string()))?;

        // never log credentials
        let host = config.url.rsplit('@').next().unwrap_or(&config.url);
        tracing::info!(
            host = %host,
            max_connections = config.max_connections,
            "Redis pool created"
        );

        Ok(Self { pool })
    }

    pub fn from_config(config: &travel_common::RedisConfig) -> RedisResult<Self> {
        Self::new(RedisPoolConfig::from(config))
    }

    pub async fn connection(&self) -> RedisResult<Connection> {
        Ok(self.pool.get().await?)
    }

    /// PING round trip
    pub async fn health_check(&self) -> RedisResult<()> {
        let mut conn = self.connection().await?;
        redis::cmd("PING").query_async::<String>(&mut conn).await?;
        Ok(())
    }

    /// `SET key <json> EX ttl`
    pub async fn put_json<V: Serialize>(
        &self,
        key: &str,
        value: &V,
        ttl_secs: u64,
    ) -> RedisResult<()> {
        let json = serde_json::to_string(value)?;
        let mut conn = self.connection().await?;
        conn.set_ex::<_, _, ()>(key, json, ttl_secs).await?;
        Ok(())
    }

    /// `SET key <json> EX ttl XX`; false when the key no longer exists
    pub async fn replace_json<V: Serialize>(
        &self,
        key: &str,
        value: &V,
        ttl_secs: u64,
    ) -> RedisResult<bool> {
        let json = serde_json::to_string(value)?;
        let mut conn = self.connection().await?;
        let reply: Option<String> = redis::cmd("SET")
            .arg(key)
            .arg(json)
            .arg("EX")
            .arg(ttl_secs)
            .arg("XX")
            .query_async(&mut conn)
            .await?;
        Ok(reply.is_some())
    }

    pub async fn get_json<V: DeserializeOwned>(&self, key: &str) -> RedisResult<Option<V>> {
        let mut conn = self.connection().await?;
        let raw: Option<String> = conn.get(key).await?;
        raw.map(|s| serde_json::from_str(&s))
            .transpose()
            .map_err(RedisPoolError::from)
    }

    /// Delete keys, returning how many existed
    pub async fn delete(&self, keys: &[String]) -> RedisResult<u64> {
        if keys.is_empty() {
            return Ok(0);
        }
        let mut conn = self.connection().await?;
        let removed: u64 = conn.del(keys).await?;
        Ok(removed)
    }

    /// Add `member` to the set at `index` and keep the set alive for at
    /// least `ttl_secs`; an index never expires before its newest member
    pub async fn index_add(&self, index: &str, member: &str, ttl_secs: u64) -> RedisResult<()> {
        let wanted = i64::try_from(ttl_secs).map_err(|_| RedisPoolError::InvalidTtl(ttl_secs))?;
        let mut conn = self.connection().await?;

        conn.sadd::<_, _, ()>(index, member).await?;
        // -1: no expiry set yet
        let current: i64 = conn.ttl(index).await?;
        if current < wanted {
            conn.expire::<_, ()>(index, wanted).await?;
        }
        Ok(())
    }

    pub async fn index_remove(&self, index: &str, member: &str) -> RedisResult<()> {
        let mut conn = self.connection().await?;
        conn.srem::<_, _, ()>(index, member).await?;
        Ok(())
    }

    pub async fn index_members(&self, index: &str) -> RedisResult<Vec<String>> {
        let mut conn = self.connection().await?;
        Ok(conn.smembers(index).await?)
    }
}
