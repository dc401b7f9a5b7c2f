//! Redis-backed login session storage

mod session_store;

pub use session_store::RedisSessionStore;
