//! # travel-cache
//!
//! Redis layer: a deadpool-managed connection pool and the login session
//! store.
//!
//! ```ignore
//! use travel_cache::{RedisPool, RedisPoolConfig, RedisSessionStore};
//!
//! let pool = RedisPool::new(RedisPoolConfig {
//!     url: "redis://127.0.0.1:6379".into(),
//!     max_connections: 16,
//! })?;
//! let sessions = RedisSessionStore::new(pool.clone());
//! ```

pub mod pool;
pub mod session;

pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool};

pub use session::RedisSessionStore;
