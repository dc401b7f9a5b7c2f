//! # travel-common
//!
//! Shared utilities: configuration, error handling, password and session
//! token handling, telemetry, and input validation.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod validation;

// Re-export commonly used types at crate root
pub use auth::{
    hash_password, validate_password_strength, verify_password, IssuedToken, PasswordService,
    SessionClaims, SessionTokenService,
};
pub use config::{
    AdminSeedConfig, AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment,
    RateLimitConfig, RedisConfig, ServerConfig, SessionConfig, SnowflakeConfig, StorageConfig,
};
pub use error::{domain_status, AppError, AppResult, ErrorResponse};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
pub use validation::{inspect_image, is_valid_phone, validate_phone, ImageKind};
