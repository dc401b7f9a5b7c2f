//! PostgreSQL implementation of BlogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use travel_core::entities::Blog;
use travel_core::error::DomainError;
use travel_core::traits::{BlogRepository, RepoResult};
use travel_core::value_objects::Snowflake;

use crate::models::BlogModel;

use super::error::{duplicate_id, map_db_error, map_write_error};

const SELECT_WITH_AUTHOR: &str = r"
    SELECT b.id, b.title, b.description, b.image_url, b.author_id,
           a.name AS author_name, a.email AS author_email,
           b.created_at, b.updated_at
    FROM blogs b
    LEFT JOIN admins a ON a.id = b.author_id
";

#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlogRepository for PgBlogRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Blog>> {
        let result = sqlx::query_as::<_, BlogModel>(&format!("{SELECT_WITH_AUTHOR} WHERE b.id = $1"))
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Blog::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Blog>> {
        let results = sqlx::query_as::<_, BlogModel>(&format!(
            "{SELECT_WITH_AUTHOR} ORDER BY b.created_at DESC, b.id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Blog::from).collect())
    }

    #[instrument(skip(self, blog), fields(blog_id = %blog.id))]
    async fn create(&self, blog: &Blog) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO blogs (id, title, description, image_url, author_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(blog.id.into_inner())
        .bind(&blog.title)
        .bind(blog.description.to_json())
        .bind(&blog.image_url)
        .bind(blog.author_id.map(Snowflake::into_inner))
        .bind(blog.created_at)
        .bind(blog.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, duplicate_id))?;

        Ok(())
    }

    #[instrument(skip(self, blog), fields(blog_id = %blog.id))]
    async fn update(&self, blog: &Blog) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE blogs
            SET title = $2, description = $3, image_url = $4, author_id = $5, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(blog.id.into_inner())
        .bind(&blog.title)
        .bind(blog.description.to_json())
        .bind(&blog.image_url)
        .bind(blog.author_id.map(Snowflake::into_inner))
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, duplicate_id))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::BlogNotFound(blog.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::BlogNotFound(id));
        }

        Ok(())
    }
}
