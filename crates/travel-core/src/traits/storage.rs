//! Image storage port

use async_trait::async_trait;

use super::repositories::RepoResult;
use crate::value_objects::ImageCategory;

#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist already validated image bytes under a generated name and
    /// return the relative path to record on the owning row
    async fn save(&self, category: ImageCategory, extension: &str, bytes: &[u8])
        -> RepoResult<String>;

    /// Delete a stored file; a file that is already gone is not an error
    async fn remove(&self, path: &str) -> RepoResult<()>;
}
