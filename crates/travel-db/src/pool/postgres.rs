//! PostgreSQL connection pool and migrations

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Directory holding the bundled SQL migrations
pub const MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/migrations");

/// Connection pool tuning
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Maximum time to wait for a connection
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl PoolConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(1800),
        }
    }
}

impl From<&travel_common::DatabaseConfig> for PoolConfig {
    fn from(config: &travel_common::DatabaseConfig) -> Self {
        Self {
            max_connections: config.max_connections,
            min_connections: config.min_connections,
            ..Self::new(config.url.clone())
        }
    }
}

pub async fn create_pool(config: &PoolConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .connect(&config.url)
        .await
}

/// Apply every pending migration from [`MIGRATIONS_DIR`]
///
/// `MIGRATIONS_DIR` can be overridden at runtime with the environment
/// variable of the same name, for deployments that ship the SQL elsewhere.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    let dir = std::env::var("MIGRATIONS_DIR").unwrap_or_else(|_| MIGRATIONS_DIR.to_string());
    let migrator = Migrator::new(Path::new(&dir)).await?;
    migrator.run(pool).await?;
    info!(dir = %dir, "Database migrations applied");
    Ok(())
}

/// Round-trip a trivial query; used by readiness probes
pub async fn ping(pool: &PgPool) -> bool {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .is_ok()
}
