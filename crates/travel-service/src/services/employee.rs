//! Employee service
//!
//! Manages dashboard staff accounts. Passwords are hashed with argon2
//! before they reach the repository; deleting an employee also ends every
//! session they hold.

use tracing::{info, instrument};
use travel_core::{Employee, ImageCategory, SessionRole, Snowflake};

use crate::dto::{CreateEmployeeRequest, EmployeeResponse, ImageUpload, UpdateEmployeeRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::images::ImageLifecycle;

pub struct EmployeeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EmployeeService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, request, photo), fields(email = %request.email))]
    pub async fn create(
        &self,
        request: CreateEmployeeRequest,
        photo: Option<ImageUpload>,
    ) -> ServiceResult<EmployeeResponse> {
        // Reject weak passwords before anything touches storage
        let password_hash = self.ctx.password_service().hash(&request.password)?;

        let images = ImageLifecycle::new(self.ctx);
        let photo_path = images
            .store_optional(ImageCategory::EmployeePhotos, photo.as_ref())
            .await?;

        let mut employee = Employee::new(
            self.ctx.generate_id(),
            request.first_name,
            request.last_name,
            request.email,
            request.phone,
        );
        employee.address = request.address.unwrap_or_default();
        employee.profile_photo.clone_from(&photo_path);

        images
            .commit(
                photo_path.as_slice(),
                self.ctx.employee_repo().create(&employee, &password_hash),
            )
            .await?;

        info!(employee_id = %employee.id, "Employee created");
        Ok(EmployeeResponse::from(employee))
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> ServiceResult<Vec<EmployeeResponse>> {
        let employees = self.ctx.employee_repo().find_all().await?;
        Ok(employees.iter().map(EmployeeResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn find_one(&self, id: Snowflake) -> ServiceResult<EmployeeResponse> {
        self.load(id).await.map(EmployeeResponse::from)
    }

    #[instrument(skip(self, request, photo))]
    pub async fn update(
        &self,
        id: Snowflake,
        request: UpdateEmployeeRequest,
        photo: Option<ImageUpload>,
    ) -> ServiceResult<EmployeeResponse> {
        let mut employee = self.load(id).await?;

        let new_hash = match request.password.as_deref().filter(|p| !p.is_empty()) {
            Some(password) => Some(self.ctx.password_service().hash(password)?),
            None => None,
        };

        if let Some(v) = request.first_name {
            employee.first_name = v;
        }
        if let Some(v) = request.last_name {
            employee.last_name = v;
        }
        if let Some(v) = request.email {
            employee.email = v;
        }
        if let Some(v) = request.phone {
            employee.phone = v;
        }
        if let Some(v) = request.address {
            employee.address = v;
        }
        employee.updated_at = chrono::Utc::now();

        let images = ImageLifecycle::new(self.ctx);
        let new_photo = images
            .store_optional(ImageCategory::EmployeePhotos, photo.as_ref())
            .await?;
        let replaced = new_photo.clone().and_then(|path| employee.replace_photo(path));

        images
            .commit(new_photo.as_slice(), self.ctx.employee_repo().update(&employee))
            .await?;
        images.discard(replaced.as_deref()).await;

        if let Some(hash) = new_hash {
            self.ctx.employee_repo().update_password(id, &hash).await?;
            info!(employee_id = %id, "Employee password changed");
        }

        info!(employee_id = %id, "Employee updated");
        Ok(EmployeeResponse::from(employee))
    }

    /// Delete the account, its sessions, then its photo
    #[instrument(skip(self))]
    pub async fn remove(&self, id: Snowflake) -> ServiceResult<()> {
        let employee = self.load(id).await?;
        self.ctx.employee_repo().delete(id).await?;

        let revoked = self
            .ctx
            .session_store()
            .delete_for_principal(SessionRole::Employee, id)
            .await?;
        ImageLifecycle::new(self.ctx)
            .discard(employee.profile_photo.as_deref())
            .await;

        info!(employee_id = %id, revoked, "Employee deleted");
        Ok(())
    }

    async fn load(&self, id: Snowflake) -> ServiceResult<Employee> {
        self.ctx
            .employee_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Employee", id.to_string()))
    }
}
