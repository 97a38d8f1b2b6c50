//! Organizations management view

use super::list::ListView;
use crate::client::api::OrganizationAdminApi;
use crate::client::models::{Organization, OrganizationJobsResponse};
use crate::error::{ApiError, Result};

/// Organizations list with a read-only jobs panel
#[derive(Debug, Clone, Default)]
pub struct OrganizationsView {
    pub list: ListView<Organization>,
}

impl OrganizationsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load<A: OrganizationAdminApi + ?Sized>(&mut self, api: &A) -> Result<()> {
        self.list
            .load(|params| async move { api.list_organizations(&params).await })
            .await
    }

    pub async fn go_to_page<A: OrganizationAdminApi + ?Sized>(
        &mut self,
        api: &A,
        page: usize,
    ) -> Result<()> {
        self.list
            .go_to_page(page, |params| async move {
                api.list_organizations(&params).await
            })
            .await
    }

    pub async fn next_page<A: OrganizationAdminApi + ?Sized>(&mut self, api: &A) -> Result<bool> {
        self.list
            .next_page(|params| async move { api.list_organizations(&params).await })
            .await
    }

    pub async fn previous_page<A: OrganizationAdminApi + ?Sized>(
        &mut self,
        api: &A,
    ) -> Result<bool> {
        self.list
            .previous_page(|params| async move { api.list_organizations(&params).await })
            .await
    }

    /// Walk pages from the current one until the organization is loaded.
    pub async fn locate<A: OrganizationAdminApi + ?Sized>(
        &mut self,
        api: &A,
        org_id: i64,
    ) -> Result<Organization> {
        self.list
            .locate(org_id, |params| async move {
                api.list_organizations(&params).await
            })
            .await
    }

    /// Find the organization and open its jobs panel.
    pub async fn view_jobs<A: OrganizationAdminApi + ?Sized>(
        &mut self,
        api: &A,
        org_id: i64,
    ) -> Result<&OrganizationJobsResponse> {
        let org = self.locate(api, org_id).await?;
        self.list
            .open_entity(org, |org| async move { api.organization_jobs(org.id).await })
            .await?;

        self.list
            .selected
            .as_ref()
            .and_then(|panel| panel.jobs.as_ref())
            .ok_or_else(|| ApiError::InvalidResponse("jobs panel is empty".to_string()).into())
    }
}
