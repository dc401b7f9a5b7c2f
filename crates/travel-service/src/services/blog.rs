//! Blog service
//!
//! Posts carry a rich-text body and an optional cover image stored under
//! `uploads/blog_photos/`.

use tracing::{info, instrument};
use travel_core::{Blog, ImageCategory, RichText, Snowflake};

use crate::dto::{BlogResponse, CreateBlogRequest, ImageUpload, UpdateBlogRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::images::ImageLifecycle;

/// Blog service
pub struct BlogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BlogService<'a> {
    /// Create a new BlogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a post, storing its image first
    #[instrument(skip(self, request, image), fields(title = %request.title))]
    pub async fn create(
        &self,
        request: CreateBlogRequest,
        image: Option<ImageUpload>,
    ) -> ServiceResult<BlogResponse> {
        let author_id = parse_author(request.author_id.as_deref())?;
        let images = ImageLifecycle::new(self.ctx);
        let image_url = images
            .store_optional(ImageCategory::BlogPhotos, image.as_ref())
            .await?;

        let mut blog = Blog::new(
            self.ctx.generate_id(),
            request.title,
            RichText::from_plain(request.description.as_deref()),
        );
        blog.author_id = author_id;
        blog.image_url.clone_from(&image_url);

        images
            .commit(image_url.as_slice(), self.ctx.blog_repo().create(&blog))
            .await?;

        info!(blog_id = %blog.id, "Blog created");

        // Re-read for the author projection
        let stored = self.ctx.blog_repo().find_by_id(blog.id).await?;
        Ok(BlogResponse::from(stored.unwrap_or(blog)))
    }

    /// All posts, newest first
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> ServiceResult<Vec<BlogResponse>> {
        let blogs = self.ctx.blog_repo().find_all().await?;
        Ok(blogs.iter().map(BlogResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn find_one(&self, id: Snowflake) -> ServiceResult<BlogResponse> {
        self.load(id).await.map(BlogResponse::from)
    }

    /// Apply field changes and optionally swap the image
    ///
    /// The replaced image is removed only after the row write succeeds; if
    /// the write fails the new image is removed and the old one kept.
    #[instrument(skip(self, request, image))]
    pub async fn update(
        &self,
        id: Snowflake,
        request: UpdateBlogRequest,
        image: Option<ImageUpload>,
    ) -> ServiceResult<BlogResponse> {
        let mut blog = self.load(id).await?;

        if let Some(title) = request.title {
            blog.set_title(title);
        }
        if let Some(description) = request.description {
            blog.set_description(RichText::new(description));
        }
        if let Some(raw) = request.author_id.as_deref() {
            blog.author_id = parse_author(Some(raw))?;
        }

        let images = ImageLifecycle::new(self.ctx);
        let new_image = images
            .store_optional(ImageCategory::BlogPhotos, image.as_ref())
            .await?;
        let replaced = new_image.clone().and_then(|path| blog.replace_image(path));

        images
            .commit(new_image.as_slice(), self.ctx.blog_repo().update(&blog))
            .await?;
        images.discard(replaced.as_deref()).await;

        info!(blog_id = %id, image_replaced = replaced.is_some(), "Blog updated");

        let stored = self.ctx.blog_repo().find_by_id(id).await?;
        Ok(BlogResponse::from(stored.unwrap_or(blog)))
    }

    /// Delete the row, then its image
    #[instrument(skip(self))]
    pub async fn remove(&self, id: Snowflake) -> ServiceResult<()> {
        let blog = self.load(id).await?;
        self.ctx.blog_repo().delete(id).await?;
        ImageLifecycle::new(self.ctx)
            .discard(blog.image_url.as_deref())
            .await;

        info!(blog_id = %id, "Blog deleted");
        Ok(())
    }

    async fn load(&self, id: Snowflake) -> ServiceResult<Blog> {
        self.ctx
            .blog_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Blog", id.to_string()))
    }
}

/// Blank means "no author"
fn parse_author(raw: Option<&str>) -> ServiceResult<Option<Snowflake>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => Snowflake::parse(raw)
            .map(Some)
            .map_err(|_| ServiceError::validation(format!("Invalid authorId: {raw}"))),
    }
}
