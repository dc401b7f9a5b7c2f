//! Axum extractors for request handling
//!
//! Custom extractors for sessions, validation, multipart forms and path ids.

mod multipart;
mod path;
mod session;
mod validated;

pub use multipart::MultipartForm;
pub use path::IdPath;
pub use session::{ActiveSession, AdminSession, SessionToken, SessionUser};
pub use validated::ValidatedJson;
