//! User administration API trait

use async_trait::async_trait;

use crate::client::models::{OrganizationJobsResponse, UpdateUserRequest, User};
use crate::client::pagination::{Page, PageParams};
use crate::error::Result;

/// User administration operations
#[async_trait]
pub trait UserAdminApi: Send + Sync {
    /// Load one page of users (`GET /users/?page=N`)
    async fn list_users(&self, params: &PageParams) -> Result<Page<User>>;

    /// Partially update a user (`PATCH /users/{id}/`) and return the stored record
    async fn update_user(&self, user_id: i64, patch: &UpdateUserRequest) -> Result<User>;

    /// Activate or deactivate a user (`PATCH /users/{id}/status/`)
    async fn set_user_status(&self, user_id: i64, is_active: bool) -> Result<User>;

    /// Jobs visible to a user, looked up by email
    async fn user_jobs(&self, email: &str) -> Result<OrganizationJobsResponse>;
}
