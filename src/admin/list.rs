//! Generic list / detail / mutate view state
//!
//! A [`ListView`] holds one loaded page of entities, a client-side search
//! term, and at most one open [`DetailPanel`]. Fetching is delegated to the
//! caller through closures so the same state machine serves every entity.

use std::future::Future;

use log::debug;
use serde::Serialize;

use crate::client::models::{Organization, OrganizationJobsResponse, User};
use crate::client::pagination::{FIRST_PAGE, Page, PageParams};
use crate::error::{ApiError, Result};

/// An entity that can be listed, searched and patched by id.
pub trait Listable: Clone {
    /// Label used in log and error messages
    const KIND: &'static str;

    fn id(&self) -> i64;

    /// Fields matched by the search term
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match over the search fields.
    /// `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

impl Listable for User {
    const KIND: &'static str = "User";

    fn id(&self) -> i64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.full_name, &self.email]
    }
}

impl Listable for Organization {
    const KIND: &'static str = "Organization";

    fn id(&self) -> i64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.domain]
    }
}

/// The open detail panel: one entity plus its jobs projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailPanel<T> {
    pub entity: T,
    /// `None` until the jobs fetch completes, or when it failed
    pub jobs: Option<OrganizationJobsResponse>,
}

/// State of one list-management view
#[derive(Debug, Clone)]
pub struct ListView<T> {
    pub page: usize,
    pub items: Vec<T>,
    pub count: usize,
    pub has_next: bool,
    pub has_previous: bool,
    pub search: String,
    pub loading: bool,
    pub selected: Option<DetailPanel<T>>,
    pub detail_loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self {
            page: FIRST_PAGE,
            items: Vec::new(),
            count: 0,
            has_next: false,
            has_previous: false,
            search: String::new(),
            loading: false,
            selected: None,
            detail_loading: false,
            error: None,
            success: None,
        }
    }
}

impl<T: Listable> ListView<T> {
    /// Current page as request parameters
    pub fn params(&self) -> PageParams {
        PageParams::new().page(self.page)
    }

    /// Fetch the current page.
    ///
    /// On failure the error is recorded and the previously loaded page stays
    /// in place.
    pub async fn load<F, Fut>(&mut self, fetch: F) -> Result<()>
    where
        F: FnOnce(PageParams) -> Fut,
        Fut: Future<Output = Result<Page<T>>>,
    {
        self.loading = true;
        self.error = None;
        debug!("Loading {} page {}", T::KIND, self.page);

        let result = fetch(self.params()).await;
        self.loading = false;

        match result {
            Ok(page) => {
                debug!(
                    "Loaded {} {} rows (count={}, next={}, previous={})",
                    page.items.len(),
                    T::KIND,
                    page.count,
                    page.has_next,
                    page.has_previous
                );
                self.items = page.items;
                self.count = page.count;
                self.has_next = page.has_next;
                self.has_previous = page.has_previous;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Load `page`; the page number is restored if the fetch fails.
    pub async fn go_to_page<F, Fut>(&mut self, page: usize, fetch: F) -> Result<()>
    where
        F: FnOnce(PageParams) -> Fut,
        Fut: Future<Output = Result<Page<T>>>,
    {
        let previous = self.page;
        self.page = page.max(FIRST_PAGE);
        let result = self.load(fetch).await;
        if result.is_err() {
            self.page = previous;
        }
        result
    }

    /// Advance one page. Returns `false` without fetching on the last page.
    pub async fn next_page<F, Fut>(&mut self, fetch: F) -> Result<bool>
    where
        F: FnOnce(PageParams) -> Fut,
        Fut: Future<Output = Result<Page<T>>>,
    {
        if !self.has_next {
            return Ok(false);
        }
        self.go_to_page(self.page + 1, fetch).await?;
        Ok(true)
    }

    /// Go back one page. Returns `false` without fetching on the first page.
    pub async fn previous_page<F, Fut>(&mut self, fetch: F) -> Result<bool>
    where
        F: FnOnce(PageParams) -> Fut,
        Fut: Future<Output = Result<Page<T>>>,
    {
        if !self.has_previous || self.page <= FIRST_PAGE {
            return Ok(false);
        }
        self.go_to_page(self.page - 1, fetch).await?;
        Ok(true)
    }

    /// Walk forward from the current page until `id` is loaded.
    ///
    /// Loads the current page first when nothing is loaded yet. Leaves the
    /// view on the page holding the entity.
    pub async fn locate<F, Fut>(&mut self, id: i64, mut fetch: F) -> Result<T>
    where
        F: FnMut(PageParams) -> Fut,
        Fut: Future<Output = Result<Page<T>>>,
    {
        if self.items.is_empty() {
            self.load(&mut fetch).await?;
        }
        loop {
            if let Some(entity) = self.find(id) {
                return Ok(entity.clone());
            }
            if !self.next_page(&mut fetch).await? {
                let message = format!("{} not found: {}", T::KIND, id);
                self.record_error(message.clone());
                return Err(ApiError::NotFound(message).into());
            }
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Loaded items matching the search term
    pub fn visible(&self) -> Vec<&T> {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return self.items.iter().collect();
        }
        self.items.iter().filter(|item| item.matches(&needle)).collect()
    }

    /// Look up an entity: the open panel first, then the loaded page.
    pub fn find(&self, id: i64) -> Option<&T> {
        self.selected
            .as_ref()
            .map(|panel| &panel.entity)
            .filter(|entity| entity.id() == id)
            .or_else(|| self.items.iter().find(|item| item.id() == id))
    }

    /// Open the detail panel for a given entity and fetch its jobs.
    ///
    /// The panel stays open when the jobs fetch fails; the error is recorded.
    pub async fn open_entity<F, Fut>(&mut self, entity: T, fetch_detail: F) -> Result<()>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<OrganizationJobsResponse>>,
    {
        debug!("Opening {} {}", T::KIND, entity.id());
        self.error = None;
        self.success = None;
        self.selected = Some(DetailPanel {
            entity: entity.clone(),
            jobs: None,
        });
        self.detail_loading = true;

        let result = fetch_detail(entity).await;
        self.detail_loading = false;

        match result {
            Ok(jobs) => {
                if let Some(panel) = self.selected.as_mut() {
                    panel.jobs = Some(jobs);
                }
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Close the panel and clear transient messages.
    pub fn close(&mut self) {
        self.selected = None;
        self.detail_loading = false;
        self.error = None;
        self.success = None;
    }

    /// Replace the entity with a matching id in the page and the open panel.
    pub fn apply_update(&mut self, updated: T) {
        let id = updated.id();
        self.items = self
            .items
            .iter()
            .map(|item| {
                if item.id() == id {
                    updated.clone()
                } else {
                    item.clone()
                }
            })
            .collect();

        if let Some(panel) = self.selected.as_mut()
            && panel.entity.id() == id
        {
            panel.entity = updated;
        }
    }

    /// Record a failed action's message. State is otherwise untouched.
    pub fn record_error(&mut self, message: impl Into<String>) {
        self.success = None;
        self.error = Some(message.into());
    }

    pub fn record_success(&mut self, message: impl Into<String>) {
        self.error = None;
        self.success = Some(message.into());
    }
}
