//! Organization administration API trait

use async_trait::async_trait;

use crate::client::models::{Organization, OrganizationJobsResponse};
use crate::client::pagination::{Page, PageParams};
use crate::error::Result;

/// Organization administration operations. Organizations are read-only here.
#[async_trait]
pub trait OrganizationAdminApi: Send + Sync {
    /// Load one page of organizations (`GET /organizations/?page=N`)
    async fn list_organizations(&self, params: &PageParams) -> Result<Page<Organization>>;

    /// Jobs posted across an organization's workspaces
    async fn organization_jobs(&self, org_id: i64) -> Result<OrganizationJobsResponse>;
}
