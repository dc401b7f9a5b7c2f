//! Image lifecycle shared by the record services
//!
//! A row write is bracketed by storage work: uploads are validated and
//! stored first, the row is written, and then either the fresh files are
//! discarded (write failed) or the files the row no longer references are
//! discarded (write succeeded). Discards never fail the request.

use std::future::Future;

use tracing::warn;
use travel_common::inspect_image;
use travel_core::{ImageCategory, RepoResult};

use super::context::ServiceContext;
use super::error::ServiceResult;
use crate::dto::ImageUpload;

pub(crate) struct ImageLifecycle<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ImageLifecycle<'a> {
    pub(crate) fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Validate and store one upload
    pub(crate) async fn store(
        &self,
        category: ImageCategory,
        upload: &ImageUpload,
    ) -> ServiceResult<String> {
        let mut paths = self.store_all(category, std::slice::from_ref(upload)).await?;
        Ok(paths.remove(0))
    }

    pub(crate) async fn store_optional(
        &self,
        category: ImageCategory,
        upload: Option<&ImageUpload>,
    ) -> ServiceResult<Option<String>> {
        match upload {
            Some(upload) => self.store(category, upload).await.map(Some),
            None => Ok(None),
        }
    }

    /// Validate every upload, then store them in order
    ///
    /// Nothing is written unless all uploads pass validation; if a later
    /// write fails, the files already written are discarded.
    pub(crate) async fn store_all(
        &self,
        category: ImageCategory,
        uploads: &[ImageUpload],
    ) -> ServiceResult<Vec<String>> {
        let max = self.ctx.max_upload_bytes();
        let kinds = uploads
            .iter()
            .map(|u| inspect_image(&u.bytes, u.content_type.as_deref(), max))
            .collect::<Result<Vec<_>, _>>()?;

        let mut stored = Vec::with_capacity(uploads.len());
        for (upload, kind) in uploads.iter().zip(kinds) {
            match self
                .ctx
                .image_store()
                .save(category, kind.extension(), &upload.bytes)
                .await
            {
                Ok(path) => stored.push(path),
                Err(e) => {
                    self.discard(stored.iter().map(String::as_str)).await;
                    return Err(e.into());
                }
            }
        }
        Ok(stored)
    }

    /// Await a row write; on failure remove the files stored for it
    pub(crate) async fn commit<T>(
        &self,
        fresh: &[String],
        write: impl Future<Output = RepoResult<T>>,
    ) -> ServiceResult<T> {
        match write.await {
            Ok(value) => Ok(value),
            Err(e) => {
                self.discard(fresh.iter().map(String::as_str)).await;
                Err(e.into())
            }
        }
    }

    /// Best-effort removal; failures are logged and swallowed
    pub(crate) async fn discard<'p>(&self, paths: impl IntoIterator<Item = &'p str>) {
        for path in paths {
            if path.is_empty() {
                continue;
            }
            if let Err(e) = self.ctx.image_store().remove(path).await {
                warn!(path, error = %e, "Failed to remove image");
            }
        }
    }
}
