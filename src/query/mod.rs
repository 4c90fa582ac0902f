//! Query synchronisation layer
//!
//! Turns query state into deduplicated, correctly ordered requests:
//!
//! - `params`: [`QueryParams`], its [`DedupKey`], and [`ResourcePage`]
//! - `controller`: [`QueryController`], the per-resource fetch lifecycle
//! - `strategy`: [`StrategyRegistry`], picking a resource by scope
//! - `item`: [`CatalogItem`], the row type every resource yields

pub mod controller;
pub mod item;
pub mod params;
pub mod strategy;

pub use controller::{Completion, QueryController, QueryState, Ticket};
pub use item::CatalogItem;
pub use params::{DedupKey, QueryParams, ResourcePage};
pub use strategy::{
    CatalogResource, DEFAULT_SCOPE, DatasetResource, ModelResource, StrategyRegistry,
    normalize_scope, scope_from_route,
};

use crate::api::{ApiClient, Tag};

/// Controller for item listings
pub type ResourceController = QueryController<ResourcePage<CatalogItem>>;

/// Controller for the raw tag list of one scope
pub type TagController = QueryController<Vec<Tag>>;

impl ResourceController {
    /// Query `resource` for `params`, skipping the request if unchanged
    pub async fn query(
        &mut self,
        resource: &dyn CatalogResource,
        params: &QueryParams,
    ) -> &QueryState<ResourcePage<CatalogItem>> {
        self.run(params.dedup_key(), || resource.fetch_page(params))
            .await
    }
}

impl TagController {
    /// Dedup key for a tag fetch: the scope it will be grouped for
    #[must_use]
    pub fn key_for(scope: &str) -> DedupKey {
        DedupKey::new(format!("tags:{}", normalize_scope(scope)))
    }

    /// Fetch tags when `scope` changed since the last request
    pub async fn query(&mut self, client: &ApiClient, scope: &str) -> &QueryState<Vec<Tag>> {
        self.run(Self::key_for(scope), || client.tags()).await
    }
}
