//! Application configuration structs
//!
//! Loaded from environment variables, with a `.env` file honoured in development.

use serde::Deserialize;
use std::env;
use std::str::FromStr;
use travel_core::SnowflakeGenerator;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub session: SessionConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub storage: StorageConfig,
    pub snowflake: SnowflakeConfig,
    /// Bootstrap admin account, created at startup when absent
    pub admin: Option<AdminSeedConfig>,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" | "dev" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Run bundled migrations on startup
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

/// Redis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    #[serde(default = "default_redis_max_connections")]
    pub max_connections: u32,
}

/// Login session configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// HMAC secret used to sign session tokens
    pub secret: String,
    #[serde(default = "default_session_ttl")]
    pub ttl_secs: i64,
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Mark the cookie `Secure`; off in development so plain http works
    #[serde(default)]
    pub cookie_secure: bool,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// File storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory that holds the `uploads/` tree
    #[serde(default = "default_storage_root")]
    pub root_dir: String,
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: u32,
    /// Prefix clients put in front of stored relative paths
    #[serde(default)]
    pub public_base_url: Option<String>,
}

impl StorageConfig {
    #[must_use]
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb as usize * 1024 * 1024
    }
}

/// Snowflake ID generator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SnowflakeConfig {
    #[serde(default)]
    pub worker_id: u16,
}

/// Admin account seeded on startup
#[derive(Debug, Clone, Deserialize)]
pub struct AdminSeedConfig {
    pub email: String,
    pub password: String,
    #[serde(default = "default_admin_name")]
    pub name: String,
}

// Default value functions
fn default_app_name() -> String {
    "travel-api".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    2
}

fn default_true() -> bool {
    true
}

fn default_redis_max_connections() -> u32 {
    10
}

fn default_session_ttl() -> i64 {
    28_800 // 8 hours
}

fn default_cookie_name() -> String {
    "travel_session".to_string()
}

fn default_requests_per_second() -> u32 {
    20
}

fn default_burst() -> u32 {
    100
}

fn default_storage_root() -> String {
    ".".to_string()
}

fn default_max_file_size() -> u32 {
    5
}

fn default_admin_name() -> String {
    "Administrator".to_string()
}

fn var(key: &'static str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    var(key).ok_or(ConfigError::MissingVar(key))
}

/// Parse an optional variable, rejecting values that are present but malformed
fn parsed<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    var(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(key, raw))
        })
        .transpose()
}

/// `WORKER_ID` must fit the snowflake worker field
fn worker_id(key: &'static str) -> Result<u16, ConfigError> {
    match parsed::<u16>(key)? {
        Some(id) if id > SnowflakeGenerator::MAX_WORKER_ID => {
            Err(ConfigError::InvalidValue(key, id.to_string()))
        }
        id => Ok(id.unwrap_or(0)),
    }
}

fn flag(key: &'static str) -> Result<Option<bool>, ConfigError> {
    var(key)
        .map(|raw| match raw.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidValue(key, raw)),
        })
        .transpose()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let env = match var("APP_ENV") {
            Some(raw) => Environment::parse(&raw).ok_or(ConfigError::InvalidValue("APP_ENV", raw))?,
            None => default_env(),
        };

        let admin = match (var("ADMIN_EMAIL"), var("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminSeedConfig {
                email,
                password,
                name: var("ADMIN_NAME").unwrap_or_else(default_admin_name),
            }),
            (Some(_), None) => return Err(ConfigError::MissingVar("ADMIN_PASSWORD")),
            _ => None,
        };

        Ok(Self {
            app: AppSettings {
                name: var("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            api: ServerConfig {
                host: var("API_HOST").unwrap_or_else(default_host),
                port: parsed("API_PORT")?.ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            database: DatabaseConfig {
                url: required("DATABASE_URL")?,
                max_connections: parsed("DATABASE_MAX_CONNECTIONS")?
                    .unwrap_or_else(default_max_connections),
                min_connections: parsed("DATABASE_MIN_CONNECTIONS")?
                    .unwrap_or_else(default_min_connections),
                run_migrations: flag("DATABASE_RUN_MIGRATIONS")?.unwrap_or_else(default_true),
            },
            redis: RedisConfig {
                url: required("REDIS_URL")?,
                max_connections: parsed("REDIS_MAX_CONNECTIONS")?
                    .unwrap_or_else(default_redis_max_connections),
            },
            session: SessionConfig {
                secret: required("SESSION_SECRET")?,
                ttl_secs: parsed("SESSION_TTL_SECS")?.unwrap_or_else(default_session_ttl),
                cookie_name: var("SESSION_COOKIE_NAME").unwrap_or_else(default_cookie_name),
                cookie_secure: flag("SESSION_COOKIE_SECURE")?.unwrap_or(env.is_production()),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parsed("RATE_LIMIT_REQUESTS_PER_SECOND")?
                    .unwrap_or_else(default_requests_per_second),
                burst: parsed("RATE_LIMIT_BURST")?.unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: var("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            storage: StorageConfig {
                root_dir: var("STORAGE_ROOT").unwrap_or_else(default_storage_root),
                max_file_size_mb: parsed("MAX_FILE_SIZE_MB")?.unwrap_or_else(default_max_file_size),
                public_base_url: var("PUBLIC_BASE_URL"),
            },
            snowflake: SnowflakeConfig {
                worker_id: worker_id("WORKER_ID")?,
            },
            admin,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
