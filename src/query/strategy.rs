//! Scope → resource registry
//!
//! Each catalog section ("model", "dataset", ...) is served by one
//! [`CatalogResource`] implementation. The registry resolves a scope string to
//! its resource and falls back to the default one for anything it does not
//! know, so an unexpected route still renders a listing.

use super::item::CatalogItem;
use super::params::{QueryParams, ResourcePage};
use crate::api::client::endpoints;
use crate::api::{ApiClient, ApiError, Dataset, Model};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Scope used when a route names nothing
pub const DEFAULT_SCOPE: &str = "model";

/// A paginated catalog resource
#[async_trait]
pub trait CatalogResource: Send + Sync {
    /// Singular scope name, matching `Tag::scope`
    fn scope(&self) -> &'static str;

    /// Plural label for headings
    fn label(&self) -> &'static str;

    /// Fetch one page for `params`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body does not decode.
    async fn fetch_page(
        &self,
        params: &QueryParams,
    ) -> Result<ResourcePage<CatalogItem>, ApiError>;
}

/// `/api/v1/models`
#[derive(Debug, Clone)]
pub struct ModelResource {
    client: ApiClient,
}

impl ModelResource {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogResource for ModelResource {
    fn scope(&self) -> &'static str {
        "model"
    }

    fn label(&self) -> &'static str {
        "Models"
    }

    async fn fetch_page(
        &self,
        params: &QueryParams,
    ) -> Result<ResourcePage<CatalogItem>, ApiError> {
        let page = self
            .client
            .list_page::<Model>(endpoints::MODELS, params)
            .await?;
        Ok(page.map(CatalogItem::from))
    }
}

/// `/api/v1/datasets`
#[derive(Debug, Clone)]
pub struct DatasetResource {
    client: ApiClient,
}

impl DatasetResource {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogResource for DatasetResource {
    fn scope(&self) -> &'static str {
        "dataset"
    }

    fn label(&self) -> &'static str {
        "Datasets"
    }

    async fn fetch_page(
        &self,
        params: &QueryParams,
    ) -> Result<ResourcePage<CatalogItem>, ApiError> {
        let page = self
            .client
            .list_page::<Dataset>(endpoints::DATASETS, params)
            .await?;
        Ok(page.map(CatalogItem::from))
    }
}

/// Normalise a scope: trim, lowercase, drop one trailing plural `s`
///
/// An empty scope becomes [`DEFAULT_SCOPE`].
#[must_use]
pub fn normalize_scope(scope: &str) -> String {
    let lowered = scope.trim().to_lowercase();
    let singular = lowered.strip_suffix('s').unwrap_or(lowered.as_str());
    if singular.is_empty() {
        DEFAULT_SCOPE.to_string()
    } else {
        singular.to_string()
    }
}

/// Scope for a route such as `/datasets` or `models/meta/llama`
///
/// Only the first path segment counts.
#[must_use]
pub fn scope_from_route(route: &str) -> String {
    let first = route
        .trim_start_matches('/')
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    normalize_scope(first)
}

/// Ordered set of resources keyed by scope
#[derive(Clone)]
pub struct StrategyRegistry {
    resources: Vec<Arc<dyn CatalogResource>>,
    default: Arc<dyn CatalogResource>,
}

impl StrategyRegistry {
    /// Registry containing only `default`
    #[must_use]
    pub fn new(default: Arc<dyn CatalogResource>) -> Self {
        Self {
            resources: vec![Arc::clone(&default)],
            default,
        }
    }

    /// Models (default) and datasets against `client`
    #[must_use]
    pub fn with_defaults(client: &ApiClient) -> Self {
        Self::new(Arc::new(ModelResource::new(client.clone())))
            .register(Arc::new(DatasetResource::new(client.clone())))
    }

    /// Add a resource; a later registration replaces one with the same scope
    #[must_use]
    pub fn register(mut self, resource: Arc<dyn CatalogResource>) -> Self {
        if let Some(slot) = self
            .resources
            .iter_mut()
            .find(|r| r.scope() == resource.scope())
        {
            *slot = resource;
        } else {
            self.resources.push(resource);
        }
        self
    }

    /// Whether `scope` has its own resource (after normalisation)
    #[must_use]
    pub fn contains(&self, scope: &str) -> bool {
        let scope = normalize_scope(scope);
        self.resources.iter().any(|r| r.scope() == scope)
    }

    /// Resource for `scope`, or the default resource if unknown
    #[must_use]
    pub fn resolve(&self, scope: &str) -> Arc<dyn CatalogResource> {
        let scope = normalize_scope(scope);
        if let Some(resource) = self.resources.iter().find(|r| r.scope() == scope) {
            return Arc::clone(resource);
        }
        debug!(%scope, fallback = self.default.scope(), "unknown scope, using default resource");
        Arc::clone(&self.default)
    }

    /// Registered scopes in registration order
    #[must_use]
    pub fn scopes(&self) -> Vec<&'static str> {
        self.resources.iter().map(|r| r.scope()).collect()
    }

    /// Scope after `current`, wrapping around
    #[must_use]
    pub fn next_scope(&self, current: &str) -> &'static str {
        let scopes = self.scopes();
        let current = normalize_scope(current);
        let idx = scopes.iter().position(|s| *s == current).unwrap_or(0);
        scopes[(idx + 1) % scopes.len()]
    }
}
