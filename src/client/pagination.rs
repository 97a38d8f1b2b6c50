//! Pagination types for super-admin list endpoints
//!
//! List endpoints are page-numbered (`?page=N`, 1-based). The server answers
//! with a paginated envelope; some deployments answer with a bare list. Both
//! shapes are modelled explicitly by [`PageBody`] and anything else fails to
//! decode.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// First page number accepted by the API
pub const FIRST_PAGE: usize = 1;

/// Page request parameters.
///
/// # Example
/// ```ignore
/// let params = PageParams::new().page(3);
/// assert_eq!(params.to_query_params(), vec![("page", "3".to_string())]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    /// 1-based page number
    pub page: usize,
}

impl Default for PageParams {
    fn default() -> Self {
        Self { page: FIRST_PAGE }
    }
}

impl PageParams {
    /// First page
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number. Values below 1 are clamped to the first page.
    pub fn page(mut self, page: usize) -> Self {
        self.page = page.max(FIRST_PAGE);
        self
    }

    /// Convert to query string parameters
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        vec![("page", self.page.to_string())]
    }
}

/// Paginated envelope: total count, opaque cursors and the page's items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Total items across all pages
    #[serde(default)]
    pub count: Option<usize>,

    /// Cursor for the following page; any truthy value means "more pages"
    #[serde(default)]
    pub next: Option<Value>,

    /// Cursor for the preceding page
    #[serde(default)]
    pub previous: Option<Value>,

    /// Items on this page
    pub results: Vec<T>,
}

/// Decoded body of a list endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PageBody<T> {
    /// `{count, next, previous, results}`
    Envelope(PaginatedResponse<T>),
    /// `[...]`
    Bare(Vec<T>),
}

impl<T> PageBody<T> {
    /// Normalize into a [`Page`].
    ///
    /// With `strict` set, a bare list is rejected as a contract violation.
    pub fn into_page(self, strict: bool) -> Result<Page<T>, ApiError> {
        match self {
            PageBody::Envelope(env) => {
                let count = env.count.unwrap_or(env.results.len());
                Ok(Page {
                    has_next: env.next.as_ref().is_some_and(is_truthy),
                    has_previous: env.previous.as_ref().is_some_and(is_truthy),
                    count,
                    items: env.results,
                })
            }
            PageBody::Bare(_) if strict => Err(ApiError::InvalidResponse(
                "expected a paginated envelope, got a bare list".to_string(),
            )),
            PageBody::Bare(items) => Ok(Page::single(items)),
        }
    }
}

/// One loaded page with navigation flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub count: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    /// A self-contained page with no neighbours
    pub fn single(items: Vec<T>) -> Self {
        Self {
            count: items.len(),
            items,
            has_next: false,
            has_previous: false,
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::single(Vec::new())
    }
}

/// JavaScript-style truthiness for cursor values
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
