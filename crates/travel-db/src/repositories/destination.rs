//! PostgreSQL implementation of DestinationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use travel_core::entities::Destination;
use travel_core::error::DomainError;
use travel_core::traits::{DestinationRepository, RepoResult};
use travel_core::value_objects::Snowflake;

use crate::models::DestinationModel;

use super::error::{duplicate_id, map_db_error, map_write_error};

const COLUMNS: &str = r"
    id, name, country, city, description, visa_requirements, language, currency_used,
    area_km2, estimated_budget, is_active, popular_sites, highlights, main_photo_url,
    gallery, created_at, updated_at
";

#[derive(Clone)]
pub struct PgDestinationRepository {
    pool: PgPool,
}

impl PgDestinationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DestinationRepository for PgDestinationRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Destination>> {
        let result = sqlx::query_as::<_, DestinationModel>(&format!(
            "SELECT {COLUMNS} FROM destinations WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Destination::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Destination>> {
        let results = sqlx::query_as::<_, DestinationModel>(&format!(
            "SELECT {COLUMNS} FROM destinations ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Destination::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_active(&self) -> RepoResult<Vec<Destination>> {
        let results = sqlx::query_as::<_, DestinationModel>(&format!(
            "SELECT {COLUMNS} FROM destinations WHERE is_active = TRUE ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Destination::from).collect())
    }

    #[instrument(skip(self, d), fields(destination_id = %d.id))]
    async fn create(&self, d: &Destination) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO destinations (
                id, name, country, city, description, visa_requirements, language,
                currency_used, area_km2, estimated_budget, is_active, popular_sites,
                highlights, main_photo_url, gallery, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            ",
        )
        .bind(d.id.into_inner())
        .bind(&d.name)
        .bind(&d.country)
        .bind(&d.city)
        .bind(d.description.to_json())
        .bind(&d.visa_requirements)
        .bind(&d.language)
        .bind(&d.currency_used)
        .bind(d.area_km2)
        .bind(d.estimated_budget)
        .bind(d.is_active)
        .bind(&d.popular_sites)
        .bind(&d.highlights)
        .bind(&d.main_photo_url)
        .bind(&d.gallery)
        .bind(d.created_at)
        .bind(d.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, duplicate_id))?;

        Ok(())
    }

    #[instrument(skip(self, d), fields(destination_id = %d.id))]
    async fn update(&self, d: &Destination) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE destinations
            SET name = $2, country = $3, city = $4, description = $5, visa_requirements = $6,
                language = $7, currency_used = $8, area_km2 = $9, estimated_budget = $10,
                is_active = $11, popular_sites = $12, highlights = $13, main_photo_url = $14,
                gallery = $15, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(d.id.into_inner())
        .bind(&d.name)
        .bind(&d.country)
        .bind(&d.city)
        .bind(d.description.to_json())
        .bind(&d.visa_requirements)
        .bind(&d.language)
        .bind(&d.currency_used)
        .bind(d.area_km2)
        .bind(d.estimated_budget)
        .bind(d.is_active)
        .bind(&d.popular_sites)
        .bind(&d.highlights)
        .bind(&d.main_photo_url)
        .bind(&d.gallery)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, duplicate_id))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::DestinationNotFound(d.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_active(&self, id: Snowflake, active: bool) -> RepoResult<()> {
        let result = sqlx::query(
            "UPDATE destinations SET is_active = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id.into_inner())
        .bind(active)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::DestinationNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM destinations WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::DestinationNotFound(id));
        }

        Ok(())
    }
}
