//! PostgreSQL implementation of PartnerRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use travel_core::entities::Partner;
use travel_core::error::DomainError;
use travel_core::traits::{PartnerRepository, RepoResult};
use travel_core::value_objects::Snowflake;

use crate::models::PartnerModel;

use super::error::{contact_conflict, map_db_error, map_write_error};

#[derive(Clone)]
pub struct PgPartnerRepository {
    pool: PgPool,
}

impl PgPartnerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PartnerRepository for PgPartnerRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Partner>> {
        let result = sqlx::query_as::<_, PartnerModel>(
            r"
            SELECT id, name, email, phone, address, image_url, created_at, updated_at
            FROM partners
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Partner::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Partner>> {
        let results = sqlx::query_as::<_, PartnerModel>(
            r"
            SELECT id, name, email, phone, address, image_url, created_at, updated_at
            FROM partners
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Partner::from).collect())
    }

    #[instrument(skip(self, partner), fields(partner_id = %partner.id))]
    async fn create(&self, partner: &Partner) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO partners (id, name, email, phone, address, image_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(partner.id.into_inner())
        .bind(&partner.name)
        .bind(&partner.email)
        .bind(&partner.phone)
        .bind(&partner.address)
        .bind(&partner.image_url)
        .bind(partner.created_at)
        .bind(partner.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, contact_conflict))?;

        Ok(())
    }

    #[instrument(skip(self, partner), fields(partner_id = %partner.id))]
    async fn update(&self, partner: &Partner) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE partners
            SET name = $2, email = $3, phone = $4, address = $5, image_url = $6, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(partner.id.into_inner())
        .bind(&partner.name)
        .bind(&partner.email)
        .bind(&partner.phone)
        .bind(&partner.address)
        .bind(&partner.image_url)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, contact_conflict))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PartnerNotFound(partner.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM partners WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PartnerNotFound(id));
        }

        Ok(())
    }
}
