//! Value objects - immutable types that represent domain concepts

mod image_category;
mod rich_text;
mod session_state;
mod snowflake;

pub use image_category::{ImageCategory, UPLOADS_ROOT};
pub use rich_text::RichText;
pub use session_state::{SessionEvent, SessionRole, SessionState};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
