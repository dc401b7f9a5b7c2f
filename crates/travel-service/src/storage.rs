//! Filesystem-backed image store
//!
//! Files land in `<root>/uploads/<category>/<millis>-<uuid>.<ext>`; the path
//! handed back (and stored on rows) is relative to `root`, which is also the
//! directory the API serves `/uploads` from.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, instrument};
use travel_core::{DomainError, ImageCategory, ImageStore, RepoResult};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct LocalImageStore {
    root: PathBuf,
}

impl LocalImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create every category directory up front
    pub async fn ensure_dirs(&self) -> RepoResult<()> {
        for category in ImageCategory::ALL {
            let dir = self.root.join(category.relative_path(""));
            tokio::fs::create_dir_all(&dir).await.map_err(|e| {
                DomainError::StorageError(format!("create {}: {e}", dir.display()))
            })?;
        }
        Ok(())
    }

    fn generate_name(extension: &str) -> String {
        format!("{}-{}.{extension}", Utc::now().timestamp_millis(), Uuid::new_v4().simple())
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn save(
        &self,
        category: ImageCategory,
        extension: &str,
        bytes: &[u8],
    ) -> RepoResult<String> {
        let relative = category.relative_path(&Self::generate_name(extension));
        let full = self.root.join(&relative);

        if let Some(parent) = full.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::StorageError(format!("create {}: {e}", parent.display())))?;
        }
        tokio::fs::write(&full, bytes)
            .await
            .map_err(|e| DomainError::StorageError(format!("write {relative}: {e}")))?;

        info!(path = %relative, "Image stored");
        Ok(relative)
    }

    #[instrument(skip(self))]
    async fn remove(&self, path: &str) -> RepoResult<()> {
        let (category, file) = ImageCategory::parse_path(path)
            .ok_or_else(|| DomainError::InvalidImagePath(path.to_string()))?;
        let full = self.root.join(category.relative_path(file));

        match tokio::fs::remove_file(&full).await {
            Ok(()) => {
                info!(path, "Image removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path, "Image already gone");
                Ok(())
            }
            Err(e) => Err(DomainError::StorageError(format!("remove {path}: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root() -> PathBuf {
        std::env::temp_dir().join(format!("travel-store-{}", Uuid::new_v4().simple()))
    }

    #[tokio::test]
    async fn save_then_remove() {
        let root = temp_root();
        let store = LocalImageStore::new(&root);

        let path = store
            .save(ImageCategory::BlogPhotos, "png", b"bytes")
            .await
            .unwrap();
        assert!(path.starts_with("uploads/blog_photos/"));
        assert!(path.ends_with(".png"));
        assert_eq!(tokio::fs::read(root.join(&path)).await.unwrap(), b"bytes");

        store.remove(&path).await.unwrap();
        assert!(!root.join(&path).exists());

        // second removal is a no-op
        store.remove(&path).await.unwrap();
        let _ = tokio::fs::remove_dir_all(&root).await;
    }

    #[tokio::test]
    async fn remove_rejects_paths_outside_uploads() {
        let store = LocalImageStore::new(temp_root());
        let err = store.remove("uploads/blog_photos/../../secret").await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidImagePath(_)));
        assert!(store.remove("/etc/passwd").await.is_err());
    }

    #[tokio::test]
    async fn ensure_dirs_creates_every_category() {
        let root = temp_root();
        let store = LocalImageStore::new(&root);
        store.ensure_dirs().await.unwrap();
        for category in ImageCategory::ALL {
            assert!(root.join("uploads").join(category.dir_name()).is_dir());
        }
        let _ = tokio::fs::remove_dir_all(&root).await;
    }
}
