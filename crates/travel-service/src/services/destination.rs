//! Destination service
//!
//! A destination owns a required main photo and a gallery of at most
//! [`GALLERY_LIMIT`](travel_core::GALLERY_LIMIT) images, all stored under
//! `uploads/destinations/`.

use chrono::Utc;
use tracing::{info, instrument};
use travel_core::{Destination, DomainError, ImageCategory, RichText, Snowflake};

use crate::dto::{
    CreateDestinationRequest, DestinationResponse, ImageUpload, UpdateDestinationRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::images::ImageLifecycle;

/// Destination service
pub struct DestinationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DestinationService<'a> {
    /// Create a new DestinationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, request, main_photo, gallery), fields(name = %request.name, gallery = gallery.len()))]
    pub async fn create(
        &self,
        request: CreateDestinationRequest,
        main_photo: Option<ImageUpload>,
        gallery: Vec<ImageUpload>,
    ) -> ServiceResult<DestinationResponse> {
        let main_photo = main_photo.ok_or(DomainError::MissingMainPhoto)?;
        Destination::check_gallery_capacity(0, gallery.len())?;

        let images = ImageLifecycle::new(self.ctx);
        let main_path = images.store(ImageCategory::Destinations, &main_photo).await?;
        let gallery_paths = match images.store_all(ImageCategory::Destinations, &gallery).await {
            Ok(paths) => paths,
            Err(e) => {
                images.discard([main_path.as_str()]).await;
                return Err(e);
            }
        };

        let mut destination = Destination::new(self.ctx.generate_id(), request.name, main_path);
        destination.country = request.country.unwrap_or_default();
        destination.city = request.city.unwrap_or_default();
        destination.description = RichText::from_plain(request.description.as_deref());
        destination.visa_requirements = request.visa_requirements.unwrap_or_default();
        destination.language = request.language.unwrap_or_default();
        destination.currency_used = request.currency_used.unwrap_or_default();
        destination.area_km2 = request.area_km2.unwrap_or_default();
        destination.estimated_budget = request.estimated_budget.unwrap_or_default();
        destination.is_active = request.is_active.unwrap_or(true);
        destination.popular_sites = request.popular_sites;
        destination.highlights = request.highlights;
        destination.gallery = gallery_paths;

        let fresh: Vec<String> = destination.image_paths().map(String::from).collect();
        images
            .commit(&fresh, self.ctx.destination_repo().create(&destination))
            .await?;

        info!(destination_id = %destination.id, "Destination created");
        Ok(DestinationResponse::from(destination))
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> ServiceResult<Vec<DestinationResponse>> {
        let all = self.ctx.destination_repo().find_all().await?;
        Ok(all.iter().map(DestinationResponse::from).collect())
    }

    /// Only destinations currently shown on the public site
    #[instrument(skip(self))]
    pub async fn find_active(&self) -> ServiceResult<Vec<DestinationResponse>> {
        let active = self.ctx.destination_repo().find_active().await?;
        Ok(active.iter().map(DestinationResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn find_one(&self, id: Snowflake) -> ServiceResult<DestinationResponse> {
        self.load(id).await.map(DestinationResponse::from)
    }

    /// Update fields, swap the main photo and reshape the gallery
    ///
    /// `keep_images` selects which existing gallery entries survive; new
    /// uploads are appended. The capacity check runs before any file is
    /// written.
    #[instrument(skip(self, request, main_photo, gallery), fields(gallery = gallery.len()))]
    pub async fn update(
        &self,
        id: Snowflake,
        request: UpdateDestinationRequest,
        main_photo: Option<ImageUpload>,
        gallery: Vec<ImageUpload>,
    ) -> ServiceResult<DestinationResponse> {
        let mut destination = self.load(id).await?;

        let (kept, dropped) = destination.partition_gallery(request.keep_images.as_deref());
        Destination::check_gallery_capacity(kept.len(), gallery.len())?;

        apply_changes(&mut destination, request);

        let images = ImageLifecycle::new(self.ctx);
        let new_main = images
            .store_optional(ImageCategory::Destinations, main_photo.as_ref())
            .await?;
        let new_gallery = match images.store_all(ImageCategory::Destinations, &gallery).await {
            Ok(paths) => paths,
            Err(e) => {
                images.discard(new_main.as_deref()).await;
                return Err(e);
            }
        };

        let mut fresh = new_gallery.clone();
        fresh.extend(new_main.iter().cloned());

        let mut stale = dropped;
        if let Some(path) = new_main {
            stale.push(std::mem::replace(&mut destination.main_photo_url, path));
        }
        destination.gallery = kept.into_iter().chain(new_gallery).collect();
        destination.updated_at = Utc::now();

        images
            .commit(&fresh, self.ctx.destination_repo().update(&destination))
            .await?;
        images.discard(stale.iter().map(String::as_str)).await;

        info!(
            destination_id = %id,
            gallery = destination.gallery.len(),
            removed = stale.len(),
            "Destination updated"
        );
        Ok(DestinationResponse::from(destination))
    }

    /// Hard delete: the row, then the main photo and every gallery image
    #[instrument(skip(self))]
    pub async fn remove(&self, id: Snowflake) -> ServiceResult<()> {
        let destination = self.load(id).await?;
        self.ctx.destination_repo().delete(id).await?;
        ImageLifecycle::new(self.ctx)
            .discard(destination.image_paths())
            .await;

        info!(destination_id = %id, "Destination deleted");
        Ok(())
    }

    /// Hide from the public site; files stay
    #[instrument(skip(self))]
    pub async fn soft_delete(&self, id: Snowflake) -> ServiceResult<DestinationResponse> {
        self.set_active(id, false).await
    }

    #[instrument(skip(self))]
    pub async fn restore(&self, id: Snowflake) -> ServiceResult<DestinationResponse> {
        self.set_active(id, true).await
    }

    async fn set_active(&self, id: Snowflake, active: bool) -> ServiceResult<DestinationResponse> {
        let mut destination = self.load(id).await?;
        self.ctx.destination_repo().set_active(id, active).await?;
        destination.set_active(active);

        info!(destination_id = %id, active, "Destination visibility changed");
        Ok(DestinationResponse::from(destination))
    }

    async fn load(&self, id: Snowflake) -> ServiceResult<Destination> {
        self.ctx
            .destination_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Destination", id.to_string()))
    }
}

fn apply_changes(d: &mut Destination, request: UpdateDestinationRequest) {
    let UpdateDestinationRequest {
        name,
        country,
        city,
        description,
        visa_requirements,
        language,
        currency_used,
        area_km2,
        estimated_budget,
        is_active,
        popular_sites,
        highlights,
        keep_images: _,
    } = request;

    if let Some(v) = name {
        d.name = v;
    }
    if let Some(v) = country {
        d.country = v;
    }
    if let Some(v) = city {
        d.city = v;
    }
    if let Some(v) = description {
        d.description = RichText::new(v);
    }
    if let Some(v) = visa_requirements {
        d.visa_requirements = v;
    }
    if let Some(v) = language {
        d.language = v;
    }
    if let Some(v) = currency_used {
        d.currency_used = v;
    }
    if let Some(v) = area_km2 {
        d.area_km2 = v;
    }
    if let Some(v) = estimated_budget {
        d.estimated_budget = v;
    }
    if let Some(v) = is_active {
        d.is_active = v;
    }
    if let Some(v) = popular_sites {
        d.popular_sites = v;
    }
    if let Some(v) = highlights {
        d.highlights = v;
    }
}
