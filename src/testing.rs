//! Testing utilities for catalogr
//!
//! Fixture builders for wire types and an in-memory [`CatalogResource`] so
//! controller and view logic can be exercised without a server.
//!
//! Only available when compiled with `cfg(test)`.

use crate::api::{ApiError, Dataset, Model, Tag};
use crate::query::{CatalogItem, CatalogResource, QueryParams, ResourcePage};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Build a tag with the fields grouping cares about
#[must_use]
pub fn tag(id: u64, name: &str, category: &str, scope: &str) -> Tag {
    Tag {
        id,
        name: name.to_string(),
        category: category.to_string(),
        scope: scope.to_string(),
        ..Tag::default()
    }
}

/// Build a model row
#[must_use]
pub fn model(id: u64, name: &str) -> Model {
    Model {
        id,
        name: name.to_string(),
        path: format!("test/{name}"),
        ..Model::default()
    }
}

/// Build a dataset row
#[must_use]
pub fn dataset(id: u64, name: &str) -> Dataset {
    Dataset {
        id,
        name: name.to_string(),
        path: format!("test/{name}"),
        ..Dataset::default()
    }
}

/// Resource serving a fixed item list, paged in memory
///
/// Records every query it receives. Search is matched as a substring of the
/// item title so tests can observe which params reached the resource.
pub struct StaticResource {
    scope: &'static str,
    items: Vec<CatalogItem>,
    calls: AtomicUsize,
    seen: Mutex<Vec<QueryParams>>,
    fail_with: Option<u16>,
}

impl StaticResource {
    #[must_use]
    pub fn new(scope: &'static str, items: Vec<CatalogItem>) -> Self {
        Self {
            scope,
            items,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    /// Every fetch answers with this HTTP status
    #[must_use]
    pub const fn failing(mut self, status: u16) -> Self {
        self.fail_with = Some(status);
        self
    }

    /// Number of fetches so far
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Params of every fetch so far, oldest first
    ///
    /// # Panics
    /// Panics if the lock was poisoned by a panicking test.
    #[must_use]
    pub fn seen(&self) -> Vec<QueryParams> {
        self.seen.lock().expect("seen lock poisoned").clone()
    }
}

#[async_trait]
impl CatalogResource for StaticResource {
    fn scope(&self) -> &'static str {
        self.scope
    }

    fn label(&self) -> &'static str {
        "Static"
    }

    async fn fetch_page(
        &self,
        params: &QueryParams,
    ) -> Result<ResourcePage<CatalogItem>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .expect("seen lock poisoned")
            .push(params.clone());

        if let Some(status) = self.fail_with {
            return Err(ApiError::Http {
                status,
                message: None,
            });
        }

        let matching: Vec<&CatalogItem> = self
            .items
            .iter()
            .filter(|item| {
                params
                    .effective_search()
                    .is_none_or(|s| item.title().contains(s))
            })
            .collect();

        let size = params.page_size as usize;
        let skip = (params.page.saturating_sub(1) as usize) * size;
        let items = matching.iter().skip(skip).take(size).map(|i| (*i).clone()).collect();
        Ok(ResourcePage::new(items, matching.len() as u64))
    }
}
