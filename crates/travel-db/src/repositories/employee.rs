//! PostgreSQL implementation of EmployeeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use travel_core::entities::Employee;
use travel_core::error::DomainError;
use travel_core::traits::{EmployeeRepository, RepoResult};
use travel_core::value_objects::Snowflake;

use crate::models::EmployeeModel;

use super::error::{contact_conflict, map_db_error, map_write_error};

#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Employee>> {
        let result = sqlx::query_as::<_, EmployeeModel>(
            r"
            SELECT id, first_name, last_name, email, phone, address, profile_photo,
                   created_at, updated_at
            FROM employees
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Employee::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>> {
        let result = sqlx::query_as::<_, EmployeeModel>(
            r"
            SELECT id, first_name, last_name, email, phone, address, profile_photo,
                   created_at, updated_at
            FROM employees
            WHERE LOWER(email) = LOWER($1)
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Employee::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let results = sqlx::query_as::<_, EmployeeModel>(
            r"
            SELECT id, first_name, last_name, email, phone, address, profile_photo,
                   created_at, updated_at
            FROM employees
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Employee::from).collect())
    }

    #[instrument(skip(self, employee, password_hash), fields(employee_id = %employee.id))]
    async fn create(&self, employee: &Employee, password_hash: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO employees (
                id, first_name, last_name, email, phone, address, profile_photo,
                password_hash, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(employee.id.into_inner())
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(&employee.phone)
        .bind(&employee.address)
        .bind(&employee.profile_photo)
        .bind(password_hash)
        .bind(employee.created_at)
        .bind(employee.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, contact_conflict))?;

        Ok(())
    }

    #[instrument(skip(self, employee), fields(employee_id = %employee.id))]
    async fn update(&self, employee: &Employee) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE employees
            SET first_name = $2, last_name = $3, email = $4, phone = $5, address = $6,
                profile_photo = $7, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(employee.id.into_inner())
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(&employee.phone)
        .bind(&employee.address)
        .bind(&employee.profile_photo)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, contact_conflict))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::EmployeeNotFound(employee.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT password_hash FROM employees WHERE id = $1")
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, password_hash))]
    async fn update_password(&self, id: Snowflake, password_hash: &str) -> RepoResult<()> {
        let result = sqlx::query(
            "UPDATE employees SET password_hash = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id.into_inner())
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::EmployeeNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::EmployeeNotFound(id));
        }

        Ok(())
    }
}
