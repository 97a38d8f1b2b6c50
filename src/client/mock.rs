//! Mock super-admin API client for testing
//!
//! Provides an in-memory implementation of the API traits for unit testing
//! without making real API calls.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::{CreditApi, OrganizationAdminApi, UserAdminApi};
use super::models::{
    CreditAdjustRequest, CreditAdjustResponse, Organization, OrganizationJobsResponse,
    UpdateUserRequest, User,
};
use super::pagination::{Page, PageBody, PageParams, PaginatedResponse};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Users configured via [`with_users`](Self::with_users) form the server-side
/// record set that mutations operate on.
///
/// # Example
/// ```ignore
/// let mock = MockSuperAdminClient::new()
///     .with_users(vec![UserBuilder::new(1).build()])
///     .await;
///
/// let page = mock.list_users(&PageParams::new()).await?;
/// assert_eq!(page.items.len(), 1);
/// ```
#[derive(Default)]
pub struct MockSuperAdminClient {
    /// Server-side user records
    users: Arc<Mutex<Vec<User>>>,
    /// Explicit user page bodies (page N -> index N-1)
    user_pages: Arc<Mutex<Option<Vec<PageBody<User>>>>>,
    /// Organizations to return from list_organizations
    orgs: Arc<Mutex<Vec<Organization>>>,
    /// Explicit organization page bodies
    org_pages: Arc<Mutex<Option<Vec<PageBody<Organization>>>>>,
    /// Jobs projections keyed by org ID
    org_jobs: Arc<Mutex<HashMap<i64, OrganizationJobsResponse>>>,
    /// Jobs projections keyed by user email
    user_jobs: Arc<Mutex<HashMap<String, OrganizationJobsResponse>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_users: usize,
    pub update_user: usize,
    pub set_user_status: usize,
    pub user_jobs: usize,
    pub list_organizations: usize,
    pub organization_jobs: usize,
    pub adjust_credits: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.list_users
            + self.update_user
            + self.set_user_status
            + self.user_jobs
            + self.list_organizations
            + self.organization_jobs
            + self.adjust_credits
    }

    /// PATCH requests issued
    pub fn patches(&self) -> usize {
        self.update_user + self.set_user_status
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// The API method called (e.g., "list_users", "adjust_credits")
    pub method: String,
    /// Page number if pagination was requested
    pub page: Option<usize>,
    /// JSON body, for mutations
    pub body: Option<serde_json::Value>,
}

impl MockSuperAdminClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the server-side user records.
    pub async fn with_users(self, users: Vec<User>) -> Self {
        *self.users.lock().await = users;
        self
    }

    /// Configure raw user page bodies returned by list_users.
    pub async fn with_user_pages(self, pages: Vec<PageBody<User>>) -> Self {
        *self.user_pages.lock().await = Some(pages);
        self
    }

    /// Configure organizations to return from list_organizations.
    pub async fn with_orgs(self, orgs: Vec<Organization>) -> Self {
        *self.orgs.lock().await = orgs;
        self
    }

    /// Configure raw organization page bodies.
    pub async fn with_org_pages(self, pages: Vec<PageBody<Organization>>) -> Self {
        *self.org_pages.lock().await = Some(pages);
        self
    }

    /// Configure the jobs projection for an organization.
    pub async fn with_org_jobs(self, org_id: i64, jobs: OrganizationJobsResponse) -> Self {
        self.org_jobs.lock().await.insert(org_id, jobs);
        self
    }

    /// Configure the jobs projection for a user email.
    pub async fn with_user_jobs(self, email: &str, jobs: OrganizationJobsResponse) -> Self {
        self.user_jobs.lock().await.insert(email.to_string(), jobs);
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        self.fail_next(error).await;
        self
    }

    /// Arm a one-shot error on an existing mock.
    pub async fn fail_next(&self, error: ApiError) {
        *self.error.lock().await = Some(error);
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Current server-side record for a user.
    pub async fn stored_user(&self, user_id: i64) -> Option<User> {
        self.users
            .lock()
            .await
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }

    async fn capture_request(
        &self,
        method: &str,
        page: Option<usize>,
        body: Option<serde_json::Value>,
    ) {
        self.captured_requests.lock().await.push(CapturedRequest {
            method: method.to_string(),
            page,
            body,
        });
    }

    fn user_not_found() -> ApiError {
        ApiError::NotFound("User not found.".to_string())
    }
}

/// Serve a configured page body or a single envelope over all records.
fn serve_page<T: Clone>(
    pages: &Option<Vec<PageBody<T>>>,
    records: &[T],
    params: &PageParams,
) -> Result<Page<T>> {
    match pages {
        Some(pages) => {
            let body = pages.get(params.page - 1).cloned().unwrap_or_else(|| {
                PageBody::Envelope(PaginatedResponse {
                    count: None,
                    next: None,
                    previous: None,
                    results: Vec::new(),
                })
            });
            Ok(body.into_page(false)?)
        }
        None => Ok(Page::single(records.to_vec())),
    }
}

// ============================================================================
// UserAdminApi Implementation
// ============================================================================

#[async_trait]
impl UserAdminApi for MockSuperAdminClient {
    async fn list_users(&self, params: &PageParams) -> Result<Page<User>> {
        self.capture_request("list_users", Some(params.page), None)
            .await;
        self.check_error().await?;
        self.call_count.lock().await.list_users += 1;

        let pages = self.user_pages.lock().await;
        let users = self.users.lock().await;
        serve_page(&pages, &users, params)
    }

    async fn update_user(&self, user_id: i64, patch: &UpdateUserRequest) -> Result<User> {
        self.capture_request("update_user", None, serde_json::to_value(patch).ok())
            .await;
        self.check_error().await?;
        self.call_count.lock().await.update_user += 1;

        let mut users = self.users.lock().await;
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(Self::user_not_found)?;

        if let Some(is_staff) = patch.is_staff {
            user.is_staff = is_staff;
        }
        Ok(user.clone())
    }

    async fn set_user_status(&self, user_id: i64, is_active: bool) -> Result<User> {
        self.capture_request(
            "set_user_status",
            None,
            Some(serde_json::json!({ "is_active": is_active })),
        )
        .await;
        self.check_error().await?;
        self.call_count.lock().await.set_user_status += 1;

        let mut users = self.users.lock().await;
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(Self::user_not_found)?;
        user.is_active = is_active;
        Ok(user.clone())
    }

    async fn user_jobs(&self, email: &str) -> Result<OrganizationJobsResponse> {
        self.capture_request("user_jobs", None, None).await;
        self.check_error().await?;
        self.call_count.lock().await.user_jobs += 1;

        self.user_jobs
            .lock()
            .await
            .get(email)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("No jobs for {}", email)).into())
    }
}

// ============================================================================
// OrganizationAdminApi Implementation
// ============================================================================

#[async_trait]
impl OrganizationAdminApi for MockSuperAdminClient {
    async fn list_organizations(&self, params: &PageParams) -> Result<Page<Organization>> {
        self.capture_request("list_organizations", Some(params.page), None)
            .await;
        self.check_error().await?;
        self.call_count.lock().await.list_organizations += 1;

        let pages = self.org_pages.lock().await;
        let orgs = self.orgs.lock().await;
        serve_page(&pages, &orgs, params)
    }

    async fn organization_jobs(&self, org_id: i64) -> Result<OrganizationJobsResponse> {
        self.capture_request("organization_jobs", None, None).await;
        self.check_error().await?;
        self.call_count.lock().await.organization_jobs += 1;

        self.org_jobs
            .lock()
            .await
            .get(&org_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("Organization not found: {}", org_id)).into())
    }
}

// ============================================================================
// CreditApi Implementation
// ============================================================================

#[async_trait]
impl CreditApi for MockSuperAdminClient {
    async fn adjust_credits(&self, request: &CreditAdjustRequest) -> Result<CreditAdjustResponse> {
        self.capture_request("adjust_credits", None, serde_json::to_value(request).ok())
            .await;
        self.check_error().await?;
        self.call_count.lock().await.adjust_credits += 1;

        let mut users = self.users.lock().await;
        let user = users
            .iter_mut()
            .find(|u| u.id == request.recruiter_id)
            .ok_or_else(Self::user_not_found)?;

        let new_balance = user.credit_balance + request.amount;
        if new_balance < 0 {
            return Err(ApiError::BadRequest("Insufficient credit balance.".to_string()).into());
        }
        user.credit_balance = new_balance;

        Ok(CreditAdjustResponse {
            message: "Credits adjusted successfully.".to_string(),
            recruiter_id: user.id,
            new_balance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{OrganizationBuilder, UserBuilder, jobs_response};
    use crate::error::Error;

    #[tokio::test]
    async fn test_mock_client_default_empty() {
        let mock = MockSuperAdminClient::new();

        let users = mock.list_users(&PageParams::new()).await.unwrap();
        assert!(users.items.is_empty());

        let orgs = mock.list_organizations(&PageParams::new()).await.unwrap();
        assert!(orgs.items.is_empty());
    }

    #[tokio::test]
    async fn test_mock_client_with_orgs() {
        let mock = MockSuperAdminClient::new()
            .with_orgs(vec![
                OrganizationBuilder::new(1).name("Acme").build(),
                OrganizationBuilder::new(2).name("Globex").build(),
            ])
            .await;

        let page = mock.list_organizations(&PageParams::new()).await.unwrap();
        assert_eq!(page.count, 2);
        assert_eq!(page.items[1].name, "Globex");
    }

    #[tokio::test]
    async fn test_mock_client_with_error() {
        let mock = MockSuperAdminClient::new()
            .with_error(ApiError::Unauthorized("Invalid token.".to_string()))
            .await;

        let result = mock.list_users(&PageParams::new()).await;
        assert!(matches!(result, Err(Error::Api(ApiError::Unauthorized(_)))));

        // Error is consumed, next call succeeds
        assert!(mock.list_users(&PageParams::new()).await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_pages_by_number() {
        let mock = MockSuperAdminClient::new()
            .with_user_pages(vec![
                PageBody::Envelope(PaginatedResponse {
                    count: Some(3),
                    next: Some(serde_json::json!("page2")),
                    previous: None,
                    results: vec![UserBuilder::new(1).build(), UserBuilder::new(2).build()],
                }),
                PageBody::Envelope(PaginatedResponse {
                    count: Some(3),
                    next: None,
                    previous: Some(serde_json::json!("page1")),
                    results: vec![UserBuilder::new(3).build()],
                }),
            ])
            .await;

        let second = mock.list_users(&PageParams::new().page(2)).await.unwrap();
        assert_eq!(second.items[0].id, 3);
        assert!(second.has_previous);

        let beyond = mock.list_users(&PageParams::new().page(9)).await.unwrap();
        assert!(beyond.items.is_empty());

        let requests = mock.captured_requests().await;
        assert_eq!(requests[0].page, Some(2));
        assert_eq!(requests[1].page, Some(9));
    }

    #[tokio::test]
    async fn test_mock_credit_adjust_rejects_negative_balance() {
        let mock = MockSuperAdminClient::new()
            .with_users(vec![UserBuilder::new(5).credit_balance(10).build()])
            .await;

        let err = mock
            .adjust_credits(&CreditAdjustRequest {
                recruiter_id: 5,
                amount: -20,
                notes: "too much".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Api(ApiError::BadRequest(_))));
        assert_eq!(mock.stored_user(5).await.unwrap().credit_balance, 10);
    }

    #[tokio::test]
    async fn test_mock_jobs_lookup() {
        let mock = MockSuperAdminClient::new()
            .with_org_jobs(4, jobs_response(4, vec![]))
            .await;

        assert!(mock.organization_jobs(4).await.is_ok());
        assert!(mock.organization_jobs(5).await.is_err());
        assert_eq!(mock.call_counts().await.organization_jobs, 2);
    }
}
