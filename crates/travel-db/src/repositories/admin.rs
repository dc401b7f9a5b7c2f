//! PostgreSQL implementation of AdminRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use travel_core::entities::Admin;
use travel_core::traits::{AdminRepository, RepoResult};
use travel_core::value_objects::Snowflake;

use crate::models::AdminModel;

use super::error::{contact_conflict, map_db_error, map_write_error};

#[derive(Clone)]
pub struct PgAdminRepository {
    pool: PgPool,
}

impl PgAdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminRepository for PgAdminRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Admin>> {
        let result = sqlx::query_as::<_, AdminModel>(
            "SELECT id, name, email, created_at, updated_at FROM admins WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Admin::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Admin>> {
        let result = sqlx::query_as::<_, AdminModel>(
            r"
            SELECT id, name, email, created_at, updated_at
            FROM admins
            WHERE LOWER(email) = LOWER($1)
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Admin::from))
    }

    #[instrument(skip(self, admin, password_hash), fields(admin_id = %admin.id))]
    async fn create(&self, admin: &Admin, password_hash: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO admins (id, name, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(admin.id.into_inner())
        .bind(&admin.name)
        .bind(&admin.email)
        .bind(password_hash)
        .bind(admin.created_at)
        .bind(admin.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, contact_conflict))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT password_hash FROM admins WHERE id = $1")
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
