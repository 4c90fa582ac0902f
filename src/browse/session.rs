//! Browse session: view state wired to controllers
//!
//! A [`BrowseSession`] owns everything a listing screen needs and is UI
//! agnostic. Frontends feed it input, await [`BrowseSession::next_event`],
//! and re-render from its accessors.
//!
//! # Workflow
//!
//! ```text
//! input ──► CatalogView ──► sync() ──► controller.begin(key)
//!   │                                     │ Some(ticket)
//!   └─► Debouncer ──► commit_search       ▼
//!                                      spawn fetch ──► JoinSet
//!                                                        │
//! next_event() ◄── controller.complete(ticket, result) ◄─┘
//! ```
//!
//! Each resource kind keeps its own controller, and the tag list has one
//! more, so a failing tag fetch never blocks a listing.

use super::view::CatalogView;
use crate::api::{ApiClient, ApiError, Tag};
use crate::debounce::Debouncer;
use crate::pagination::Paginator;
use crate::query::{
    CatalogItem, CatalogResource, Completion, QueryState, ResourceController, ResourcePage,
    StrategyRegistry, TagController, Ticket,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, warn};

/// Items page state of one controller
pub type ItemsState = QueryState<ResourcePage<CatalogItem>>;

/// Settings for a new session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Initial route, e.g. `/models`
    pub route: String,
    pub page_size: u32,
    pub debounce: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            route: "/models".to_string(),
            page_size: 20,
            debounce: Duration::from_millis(500),
        }
    }
}

/// Something changed that the frontend should re-render for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Debounced search text was committed
    SearchSettled,
    /// An items fetch finished and was applied
    ItemsUpdated,
    /// The tag fetch finished and was applied
    TagsUpdated,
    /// A fetch finished but a newer one superseded it
    Stale,
}

enum FetchOutcome {
    Items {
        scope: &'static str,
        ticket: Ticket,
        result: Result<ResourcePage<CatalogItem>, ApiError>,
    },
    Tags {
        ticket: Ticket,
        result: Result<Vec<Tag>, ApiError>,
    },
}

enum Incoming {
    Search(String),
    Fetched(Result<FetchOutcome, JoinError>),
}

/// Live listing session
///
/// Must be created and driven inside a tokio runtime. Dropping it aborts
/// in-flight fetches and the pending search timer.
pub struct BrowseSession {
    client: ApiClient,
    registry: StrategyRegistry,
    view: CatalogView,
    items: HashMap<&'static str, ResourceController>,
    tags: TagController,
    debouncer: Debouncer<String>,
    search_rx: UnboundedReceiver<String>,
    tasks: JoinSet<FetchOutcome>,
}

impl BrowseSession {
    /// Start a session and issue the initial fetches
    #[must_use]
    pub fn new(client: ApiClient, registry: StrategyRegistry, config: SessionConfig) -> Self {
        let (debouncer, search_rx) = Debouncer::new(config.debounce);
        let mut session = Self {
            client,
            registry,
            view: CatalogView::new(&config.route, config.page_size),
            items: HashMap::new(),
            tags: TagController::new("tags"),
            debouncer,
            search_rx,
            tasks: JoinSet::new(),
        };
        session.sync();
        session
    }

    #[must_use]
    pub const fn view(&self) -> &CatalogView {
        &self.view
    }

    /// Resource serving the current scope
    #[must_use]
    pub fn resource(&self) -> Arc<dyn CatalogResource> {
        self.registry.resolve(self.view.scope())
    }

    /// Items state for the current scope, if it was ever queried
    #[must_use]
    pub fn items(&self) -> Option<&ItemsState> {
        let scope = self.resource().scope();
        self.items.get(scope).map(ResourceController::state)
    }

    #[must_use]
    pub const fn tags(&self) -> &QueryState<Vec<Tag>> {
        self.tags.state()
    }

    /// Total rows for the current listing, 0 before the first result
    #[must_use]
    pub fn total(&self) -> u64 {
        self.items().map_or(0, |s| s.data.total)
    }

    #[must_use]
    pub fn paginator(&self) -> Paginator {
        self.view.paginator(self.total())
    }

    /// Number of fetches still running
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Replace the search box contents
    pub fn set_search_input(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.view.set_search_input(text.clone());
        self.debouncer.push(text);
        self.sync();
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut text = self.view.search_input().to_string();
        text.push(c);
        self.set_search_input(text);
    }

    pub fn pop_search_char(&mut self) {
        let mut text = self.view.search_input().to_string();
        if text.pop().is_some() {
            self.set_search_input(text);
        }
    }

    pub fn next_page(&mut self) {
        if self.view.next_page(self.total()) {
            self.sync();
        }
    }

    pub fn prev_page(&mut self) {
        if self.view.prev_page(self.total()) {
            self.sync();
        }
    }

    pub fn jump_to(&mut self, page: u32) {
        if self.view.jump_to(page, self.total()) {
            self.sync();
        }
    }

    /// Go to another route; page, search and tag reset
    pub fn navigate(&mut self, route: &str) {
        self.discard_pending_search();
        if self.view.navigate(route) {
            debug!(scope = self.view.scope(), "scope changed");
        }
        self.view.apply_tags(self.tags.data());
        self.sync();
    }

    /// Cycle to the next registered scope
    pub fn switch_scope(&mut self) {
        let next = self.registry.next_scope(self.view.scope());
        self.navigate(&format!("/{next}s"));
    }

    /// Refetch the current query even though it did not change
    pub fn refresh(&mut self) {
        self.view.refresh();
        self.sync();
    }

    /// Expand/collapse a sidebar category
    pub fn select_category(&mut self, category: &str) {
        self.view.tags_mut().select_category(category);
    }

    /// Expand/collapse whichever category is current
    pub fn toggle_category(&mut self) {
        let current = self
            .view
            .tags()
            .selected_category()
            .map(str::to_string)
            .or_else(|| self.view.tags().groups().first_category().map(str::to_string));
        if let Some(category) = current {
            self.select_category(&category);
        }
    }

    pub fn cycle_category(&mut self, forward: bool) {
        self.view.tags_mut().cycle_category(forward);
    }

    pub fn cycle_tag(&mut self) {
        self.view.tags_mut().cycle_tag();
    }

    /// Wait for the next state change
    ///
    /// Cancel safe: nothing is lost if the returned future is dropped.
    pub async fn next_event(&mut self) -> SessionEvent {
        let incoming = tokio::select! {
            Some(search) = self.search_rx.recv() => Incoming::Search(search),
            Some(joined) = self.tasks.join_next(), if !self.tasks.is_empty() => Incoming::Fetched(joined),
            else => std::future::pending().await,
        };

        match incoming {
            Incoming::Search(search) if search != self.view.search_input() => {
                debug!(%search, "dropping search the box no longer shows");
                SessionEvent::Stale
            }
            Incoming::Search(search) => {
                self.view.commit_search(search);
                self.sync();
                SessionEvent::SearchSettled
            }
            Incoming::Fetched(Ok(outcome)) => self.apply(outcome),
            Incoming::Fetched(Err(err)) => {
                warn!(error = %err, "fetch task did not complete");
                SessionEvent::Stale
            }
        }
    }

    /// Abort in-flight fetches and the pending search
    pub fn shutdown(&mut self) {
        self.discard_pending_search();
        self.tasks.abort_all();
    }

    /// Stop the timer and drop any value it already emitted
    fn discard_pending_search(&mut self) {
        self.debouncer.cancel();
        while self.search_rx.try_recv().is_ok() {}
    }

    /// Issue whatever requests the current view needs
    ///
    /// Controllers dedup, so calling this after a no-op change is free.
    fn sync(&mut self) {
        let resource = self.resource();
        let scope = resource.scope();
        let params = self.view.params();

        let controller = self
            .items
            .entry(scope)
            .or_insert_with(|| ResourceController::new(scope));
        if let Some(ticket) = controller.begin(params.dedup_key()) {
            self.tasks.spawn(async move {
                let result = resource.fetch_page(&params).await;
                FetchOutcome::Items {
                    scope,
                    ticket,
                    result,
                }
            });
        }

        if let Some(ticket) = self.tags.begin(TagController::key_for(scope)) {
            let client = self.client.clone();
            self.tasks.spawn(async move {
                let result = client.tags().await;
                FetchOutcome::Tags { ticket, result }
            });
        }
    }

    fn apply(&mut self, outcome: FetchOutcome) -> SessionEvent {
        match outcome {
            FetchOutcome::Items {
                scope,
                ticket,
                result,
            } => {
                let Some(controller) = self.items.get_mut(scope) else {
                    return SessionEvent::Stale;
                };
                match controller.complete(ticket, result) {
                    Completion::Applied => SessionEvent::ItemsUpdated,
                    Completion::Discarded => SessionEvent::Stale,
                }
            }
            FetchOutcome::Tags { ticket, result } => match self.tags.complete(ticket, result) {
                Completion::Applied => {
                    self.view.apply_tags(self.tags.data());
                    SessionEvent::TagsUpdated
                }
                Completion::Discarded => SessionEvent::Stale,
            },
        }
    }
}

impl Drop for BrowseSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}
