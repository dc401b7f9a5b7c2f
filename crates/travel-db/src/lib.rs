//! # travel-db
//!
//! Database layer implementing the travel-core repository traits with
//! PostgreSQL via SQLx.
//!
//! ```rust,ignore
//! use travel_db::{create_pool, run_migrations, PgBlogRepository, PoolConfig};
//!
//! let pool = create_pool(&PoolConfig::new(database_url)).await?;
//! run_migrations(&pool).await?;
//! let blogs = PgBlogRepository::new(pool);
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, ping, run_migrations, PgPool, PoolConfig};
pub use repositories::{
    PgAdminRepository, PgBlogRepository, PgContactMessageRepository, PgDestinationRepository,
    PgEmployeeRepository, PgPartnerRepository,
};
