//! Partner service

use tracing::{info, instrument};
use travel_core::{ImageCategory, Partner, Snowflake};

use crate::dto::{CreatePartnerRequest, ImageUpload, PartnerResponse, UpdatePartnerRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::images::ImageLifecycle;

pub struct PartnerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PartnerService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, request, image), fields(name = %request.name))]
    pub async fn create(
        &self,
        request: CreatePartnerRequest,
        image: Option<ImageUpload>,
    ) -> ServiceResult<PartnerResponse> {
        let images = ImageLifecycle::new(self.ctx);
        let image_url = images
            .store_optional(ImageCategory::PartnerPhotos, image.as_ref())
            .await?;

        let mut partner = Partner::new(
            self.ctx.generate_id(),
            request.name,
            request.email,
            request.phone,
        );
        partner.address = request.address.unwrap_or_default();
        partner.image_url.clone_from(&image_url);

        images
            .commit(image_url.as_slice(), self.ctx.partner_repo().create(&partner))
            .await?;

        info!(partner_id = %partner.id, "Partner created");
        Ok(PartnerResponse::from(partner))
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> ServiceResult<Vec<PartnerResponse>> {
        let partners = self.ctx.partner_repo().find_all().await?;
        Ok(partners.iter().map(PartnerResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn find_one(&self, id: Snowflake) -> ServiceResult<PartnerResponse> {
        self.load(id).await.map(PartnerResponse::from)
    }

    #[instrument(skip(self, request, image))]
    pub async fn update(
        &self,
        id: Snowflake,
        request: UpdatePartnerRequest,
        image: Option<ImageUpload>,
    ) -> ServiceResult<PartnerResponse> {
        let mut partner = self.load(id).await?;

        if let Some(name) = request.name {
            partner.name = name;
        }
        if let Some(email) = request.email {
            partner.email = email;
        }
        if let Some(phone) = request.phone {
            partner.phone = phone;
        }
        if let Some(address) = request.address {
            partner.address = address;
        }
        partner.updated_at = chrono::Utc::now();

        let images = ImageLifecycle::new(self.ctx);
        let new_image = images
            .store_optional(ImageCategory::PartnerPhotos, image.as_ref())
            .await?;
        let replaced = new_image.clone().and_then(|path| partner.replace_image(path));

        images
            .commit(new_image.as_slice(), self.ctx.partner_repo().update(&partner))
            .await?;
        images.discard(replaced.as_deref()).await;

        info!(partner_id = %id, "Partner updated");
        Ok(PartnerResponse::from(partner))
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: Snowflake) -> ServiceResult<()> {
        let partner = self.load(id).await?;
        self.ctx.partner_repo().delete(id).await?;
        ImageLifecycle::new(self.ctx)
            .discard(partner.image_url.as_deref())
            .await;

        info!(partner_id = %id, "Partner deleted");
        Ok(())
    }

    async fn load(&self, id: Snowflake) -> ServiceResult<Partner> {
        self.ctx
            .partner_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Partner", id.to_string()))
    }
}
