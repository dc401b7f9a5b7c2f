//! Blog handlers
//!
//! Reads are public; writes need an unlocked dashboard session.

use axum::extract::State;
use travel_service::{
    dto::{BlogResponse, CreateBlogRequest, UpdateBlogRequest},
    BlogService,
};

use crate::extractors::{ActiveSession, IdPath, MultipartForm};
use crate::response::{ApiJson, ApiResult, Created};
use crate::state::AppState;

/// Multipart field carrying the cover image
pub const BLOG_IMAGE_FIELD: &str = "blogImg";

/// Create a blog post
///
/// POST /blogs
pub async fn create_blog(
    State(state): State<AppState>,
    _session: ActiveSession,
    mut form: MultipartForm<CreateBlogRequest>,
) -> ApiResult<Created<ApiJson<BlogResponse>>> {
    let image = form.take_file(BLOG_IMAGE_FIELD);
    let blog = BlogService::new(state.service_context())
        .create(form.fields, image)
        .await?;
    Ok(Created(ApiJson::with_message(blog, "Blog created successfully")))
}

/// GET /blogs
pub async fn list_blogs(State(state): State<AppState>) -> ApiResult<ApiJson<Vec<BlogResponse>>> {
    let blogs = BlogService::new(state.service_context()).find_all().await?;
    Ok(ApiJson::new(blogs))
}

/// GET /blogs/{id}
pub async fn get_blog(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<BlogResponse>> {
    let blog = BlogService::new(state.service_context()).find_one(id).await?;
    Ok(ApiJson::new(blog))
}

/// Update a blog post; a new image replaces the old one
///
/// PUT /blogs/{id}
pub async fn update_blog(
    State(state): State<AppState>,
    _session: ActiveSession,
    IdPath(id): IdPath,
    mut form: MultipartForm<UpdateBlogRequest>,
) -> ApiResult<ApiJson<BlogResponse>> {
    let image = form.take_file(BLOG_IMAGE_FIELD);
    let blog = BlogService::new(state.service_context())
        .update(id, form.fields, image)
        .await?;
    Ok(ApiJson::with_message(blog, "Blog updated successfully"))
}

/// DELETE /blogs/{id}
pub async fn delete_blog(
    State(state): State<AppState>,
    _session: ActiveSession,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<()>> {
    BlogService::new(state.service_context()).remove(id).await?;
    Ok(ApiJson::message("Blog deleted successfully"))
}
