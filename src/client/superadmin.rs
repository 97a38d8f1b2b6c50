//! Super-admin API client implementation

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::api::{CreditApi, OrganizationAdminApi, UserAdminApi};
use super::models::{
    CreditAdjustRequest, CreditAdjustResponse, Organization, OrganizationJobsResponse,
    UpdateUserRequest, User, UserStatusRequest,
};
use super::pagination::{Page, PageBody, PageParams};
use crate::config::Config;
use crate::error::{ApiError, GENERIC_REQUEST_FAILURE, Result};

const USERS_PATH: &str = "/api/superadmin/users/";
const ORGANIZATIONS_PATH: &str = "/api/superadmin/organizations/";
const ORGANIZATION_JOBS_PATH: &str = "/api/superadmin/organization/jobs/";
const CREDITS_ADJUST_PATH: &str = "/api/superadmin/credits/adjust/";

fn user_path(user_id: i64) -> String {
    format!("{}{}/", USERS_PATH, user_id)
}

fn user_status_path(user_id: i64) -> String {
    format!("{}{}/status/", USERS_PATH, user_id)
}

/// Tunables for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub timeout: Duration,
    pub requests_per_second: u32,
    pub strict_envelope: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            requests_per_second: 10,
            strict_envelope: false,
        }
    }
}

/// Super-admin API client
///
/// The sole network boundary: attaches the bearer token, normalizes errors,
/// and never retries.
pub struct SuperAdminClient {
    http: HttpClient,
    base_url: String,
    token: Option<String>,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    strict_envelope: bool,
}

impl SuperAdminClient {
    /// Create a client with default settings
    #[cfg(test)]
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        Self::with_settings(base_url, token, ClientSettings::default())
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let settings = ClientSettings {
            timeout: Duration::from_secs(config.preferences.timeout_secs),
            requests_per_second: config.preferences.requests_per_second,
            strict_envelope: config.preferences.strict_envelope,
        };
        Self::with_settings(config.require_api_url()?, config.auth_token.clone(), settings)
    }

    /// Create a client with explicit settings
    pub fn with_settings(
        base_url: impl Into<String>,
        token: Option<String>,
        settings: ClientSettings,
    ) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let per_second =
            NonZeroU32::new(settings.requests_per_second).unwrap_or(NonZeroU32::MIN);
        let rate_limiter = Arc::new(RateLimiter::direct(Quota::per_second(per_second)));

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
            rate_limiter,
            strict_envelope: settings.strict_envelope,
        })
    }

    /// Base URL requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a request and decode a JSON body.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<T> {
        self.rate_limiter.until_ready().await;

        let url = format!("{}{}", self.base_url, path);
        debug!("{} {} {:?}", method, url, query);

        let mut builder = self
            .http
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(ref token) = self.token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = builder.send().await.map_err(ApiError::from)?;
        let status = response.status();
        debug!("{} -> {}", url, status);

        if !status.is_success() {
            return Err(error_from_response(response).await.into());
        }

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

        let data = serde_json::from_str(&text)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))?;
        Ok(data)
    }

    async fn list_page<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &PageParams,
    ) -> Result<Page<T>> {
        let body: PageBody<T> = self
            .request(Method::GET, path, &params.to_query_params(), None)
            .await?;
        Ok(body.into_page(self.strict_envelope)?)
    }
}

/// Convert a non-2xx response into an [`ApiError`] carrying the best message available.
async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| extract_error_message(&body))
        .unwrap_or_else(|| GENERIC_REQUEST_FAILURE.to_string());

    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized(message),
        StatusCode::FORBIDDEN => ApiError::Forbidden(message),
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ApiError::BadRequest(message),
        s if s.is_server_error() => ApiError::ServerError(message),
        s => ApiError::Status {
            status: s.as_u16(),
            message,
        },
    }
}

/// Pull a human-readable message out of a JSON error body.
///
/// Looks at `detail`, `error` and `message` first, then at field-error maps
/// such as `{"notes": ["This field may not be blank."]}`.
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    match value {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Object(map) => {
            for key in ["detail", "error", "message"] {
                if let Some(msg) = map.get(key).and_then(first_text) {
                    return Some(msg);
                }
            }
            map.iter().find_map(|(field, v)| {
                first_text(v).map(|msg| {
                    if field == "non_field_errors" {
                        msg
                    } else {
                        format!("{}: {}", field, msg)
                    }
                })
            })
        }
        Value::Array(items) => items.iter().find_map(first_text),
        _ => None,
    }
}

fn first_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(first_text),
        _ => None,
    }
}

#[async_trait]
impl UserAdminApi for SuperAdminClient {
    async fn list_users(&self, params: &PageParams) -> Result<Page<User>> {
        self.list_page(USERS_PATH, params).await
    }

    async fn update_user(&self, user_id: i64, patch: &UpdateUserRequest) -> Result<User> {
        let body = serde_json::to_value(patch)?;
        self.request(Method::PATCH, &user_path(user_id), &[], Some(body))
            .await
    }

    async fn set_user_status(&self, user_id: i64, is_active: bool) -> Result<User> {
        let body = serde_json::to_value(UserStatusRequest { is_active })?;
        self.request(Method::PATCH, &user_status_path(user_id), &[], Some(body))
            .await
    }

    async fn user_jobs(&self, email: &str) -> Result<OrganizationJobsResponse> {
        let query = [("email_id", email.to_string())];
        self.request(Method::GET, ORGANIZATION_JOBS_PATH, &query, None)
            .await
    }
}

#[async_trait]
impl OrganizationAdminApi for SuperAdminClient {
    async fn list_organizations(&self, params: &PageParams) -> Result<Page<Organization>> {
        self.list_page(ORGANIZATIONS_PATH, params).await
    }

    async fn organization_jobs(&self, org_id: i64) -> Result<OrganizationJobsResponse> {
        let query = [("org_id", org_id.to_string())];
        self.request(Method::GET, ORGANIZATION_JOBS_PATH, &query, None)
            .await
    }
}

#[async_trait]
impl CreditApi for SuperAdminClient {
    async fn adjust_credits(&self, request: &CreditAdjustRequest) -> Result<CreditAdjustResponse> {
        let body = serde_json::to_value(request)?;
        self.request(Method::POST, CREDITS_ADJUST_PATH, &[], Some(body))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use mockito::Matcher;

    const USER_JSON: &str = r#"{
        "id": 7, "full_name": "Ada Byron", "email": "ada@example.com",
        "organization_name": "Acme", "is_active": false, "is_staff": false,
        "last_login": null, "created_at": "2024-03-01T09:30:00Z", "credit_balance": 100
    }"#;

    #[test]
    fn test_client_creation_trims_base_url() {
        let client = SuperAdminClient::new("https://hire.example.com/", None).unwrap();
        assert_eq!(client.base_url(), "https://hire.example.com");
    }

    #[test]
    fn test_extract_error_message_detail() {
        assert_eq!(
            extract_error_message(r#"{"detail": "User not found."}"#),
            Some("User not found.".to_string())
        );
        assert_eq!(
            extract_error_message(r#"{"error": "Insufficient balance"}"#),
            Some("Insufficient balance".to_string())
        );
    }

    #[test]
    fn test_extract_error_message_field_errors() {
        assert_eq!(
            extract_error_message(r#"{"notes": ["This field may not be blank."]}"#),
            Some("notes: This field may not be blank.".to_string())
        );
        assert_eq!(
            extract_error_message(r#"{"non_field_errors": ["Balance cannot go negative."]}"#),
            Some("Balance cannot go negative.".to_string())
        );
    }

    #[test]
    fn test_extract_error_message_unparseable() {
        assert_eq!(extract_error_message("<html>502</html>"), None);
        assert_eq!(extract_error_message(r#"{"code": 12}"#), None);
        assert_eq!(extract_error_message(""), None);
    }

    #[tokio::test]
    async fn test_list_users_sends_page_and_bearer_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/superadmin/users/")
            .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
            .match_header("authorization", "Bearer secret-token")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_body(format!(
                r#"{{"count": 21, "next": null, "previous": "p1", "results": [{}]}}"#,
                USER_JSON
            ))
            .create_async()
            .await;

        let client = SuperAdminClient::new(server.url(), Some("secret-token".to_string())).unwrap();
        let page = client.list_users(&PageParams::new().page(2)).await.unwrap();

        mock.assert_async().await;
        assert_eq!(page.count, 21);
        assert!(!page.has_next);
        assert!(page.has_previous);
        assert_eq!(page.items[0].email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_missing_token_omits_authorization_header() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/superadmin/organizations/")
            .match_query(Matcher::Any)
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = SuperAdminClient::new(server.url(), None).unwrap();
        let page = client.list_organizations(&PageParams::new()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(page.count, 0);
    }

    #[tokio::test]
    async fn test_strict_envelope_rejects_bare_list() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/superadmin/organizations/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let settings = ClientSettings {
            strict_envelope: true,
            ..ClientSettings::default()
        };
        let client = SuperAdminClient::with_settings(server.url(), None, settings).unwrap();
        let err = client
            .list_organizations(&PageParams::new())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Api(ApiError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_set_user_status_patches_status_endpoint() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/api/superadmin/users/7/status/")
            .match_body(Matcher::Json(serde_json::json!({ "is_active": false })))
            .with_status(200)
            .with_body(USER_JSON)
            .create_async()
            .await;

        let client = SuperAdminClient::new(server.url(), None).unwrap();
        let user = client.set_user_status(7, false).await.unwrap();

        mock.assert_async().await;
        assert!(!user.is_active);
    }

    #[tokio::test]
    async fn test_adjust_credits_posts_signed_amount() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/superadmin/credits/adjust/")
            .match_body(Matcher::Json(serde_json::json!({
                "recruiter_id": 7, "amount": -50, "notes": "Correction"
            })))
            .with_status(200)
            .with_body(r#"{"message": "Credits adjusted", "recruiter_id": 7, "new_balance": 50}"#)
            .create_async()
            .await;

        let client = SuperAdminClient::new(server.url(), None).unwrap();
        let response = client
            .adjust_credits(&CreditAdjustRequest {
                recruiter_id: 7,
                amount: -50,
                notes: "Correction".to_string(),
            })
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.new_balance, 50);
    }

    #[tokio::test]
    async fn test_organization_jobs_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/superadmin/organization/jobs/")
            .match_query(Matcher::UrlEncoded("org_id".into(), "3".into()))
            .with_status(200)
            .with_body(r#"{"organization": {"id": 3, "name": "Acme"}, "jobs": [], "total_jobs": 0}"#)
            .create_async()
            .await;

        let client = SuperAdminClient::new(server.url(), None).unwrap();
        let jobs = client.organization_jobs(3).await.unwrap();

        mock.assert_async().await;
        assert_eq!(jobs.organization.name, "Acme");
    }

    #[tokio::test]
    async fn test_error_body_detail_is_surfaced() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/superadmin/credits/adjust/")
            .with_status(404)
            .with_body(r#"{"detail": "User not found."}"#)
            .create_async()
            .await;

        let client = SuperAdminClient::new(server.url(), None).unwrap();
        let err = client
            .adjust_credits(&CreditAdjustRequest {
                recruiter_id: 999,
                amount: 5,
                notes: "x".to_string(),
            })
            .await
            .unwrap_err();

        match err {
            Error::Api(ApiError::NotFound(msg)) => assert_eq!(msg, "User not found."),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unparseable_error_body_falls_back() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/superadmin/users/")
            .match_query(Matcher::Any)
            .with_status(502)
            .with_body("<html>Bad gateway</html>")
            .create_async()
            .await;

        let client = SuperAdminClient::new(server.url(), None).unwrap();
        let err = client.list_users(&PageParams::new()).await.unwrap_err();

        match err {
            Error::Api(ApiError::ServerError(msg)) => assert_eq!(msg, "Request failed"),
            other => panic!("Expected ServerError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_network_failure_becomes_error_value() {
        // Port 9 (discard) is not listening on loopback in test environments
        let client = SuperAdminClient::new("http://127.0.0.1:9", None).unwrap();
        let err = client.list_users(&PageParams::new()).await.unwrap_err();

        assert!(matches!(err, Error::Api(ApiError::Network(_))));
    }
}
