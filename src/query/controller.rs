//! Per-resource fetch lifecycle
//!
//! A [`QueryController`] owns the state of one resource view: the last
//! applied data, whether a request is in flight, and the last error. It is
//! split in two so callers can run fetches however they like:
//!
//! - [`QueryController::begin`] decides whether a key needs a request at all
//!   and, if so, hands out a [`Ticket`] carrying a sequence number
//! - [`QueryController::complete`] applies a result only if its ticket is the
//!   most recently issued one
//!
//! ```text
//!  begin(A) ─► Ticket#1 ─┐
//!  begin(B) ─► Ticket#2 ─┼─► complete(#2) ─► Applied
//!                        └─► complete(#1) ─► Discarded (stale)
//! ```

use super::params::DedupKey;
use std::fmt::Display;
use std::future::Future;
use tracing::{debug, warn};

/// Snapshot of a controller's view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState<D> {
    /// Last successfully applied data. Kept across loads and failures.
    pub data: D,
    /// A request for the latest key is in flight
    pub loading: bool,
    /// Message from the last failed request, cleared on success
    pub error: Option<String>,
}

impl<D: Default> Default for QueryState<D> {
    fn default() -> Self {
        Self {
            data: D::default(),
            loading: false,
            error: None,
        }
    }
}

/// Permission to apply one fetch result
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a ticket must be completed or the controller stays loading"]
pub struct Ticket {
    seq: u64,
    key: DedupKey,
}

impl Ticket {
    #[must_use]
    pub const fn seq(&self) -> u64 {
        self.seq
    }

    #[must_use]
    pub const fn key(&self) -> &DedupKey {
        &self.key
    }
}

/// What happened to a completed fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Result belonged to the latest request and was applied
    Applied,
    /// A newer request was issued after this one; result dropped
    Discarded,
}

#[derive(Debug, Clone)]
struct LastRequest {
    key: DedupKey,
    seq: u64,
}

/// Fetch lifecycle for one resource kind
///
/// Dedup is scoped to the instance: two controllers never suppress each
/// other's requests.
#[derive(Debug)]
pub struct QueryController<D> {
    name: &'static str,
    state: QueryState<D>,
    last: Option<LastRequest>,
    next_seq: u64,
}

impl<D: Default> QueryController<D> {
    /// Create an idle controller; `name` is used in log lines
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: QueryState::default(),
            last: None,
            next_seq: 1,
        }
    }
}

impl<D> QueryController<D> {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn state(&self) -> &QueryState<D> {
        &self.state
    }

    #[must_use]
    pub const fn data(&self) -> &D {
        &self.state.data
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.state.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    /// Key of the last issued request
    #[must_use]
    pub fn last_key(&self) -> Option<&DedupKey> {
        self.last.as_ref().map(|l| &l.key)
    }

    /// Start a request for `key` unless it matches the last one issued
    ///
    /// Returns `None` when the key is unchanged; state is left exactly as it
    /// was. Otherwise marks the controller loading, keeping the previous data
    /// visible, and returns the ticket the result must be completed with.
    pub fn begin(&mut self, key: DedupKey) -> Option<Ticket> {
        if self.last.as_ref().is_some_and(|l| l.key == key) {
            debug!(controller = self.name, %key, "dedup hit, skipping request");
            return None;
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.last = Some(LastRequest {
            key: key.clone(),
            seq,
        });
        self.state.loading = true;

        debug!(controller = self.name, %key, seq, "issuing request");
        Some(Ticket { seq, key })
    }

    /// Apply the result for `ticket` if it is still the latest request
    pub fn complete<E: Display>(&mut self, ticket: Ticket, result: Result<D, E>) -> Completion {
        let latest = self.last.as_ref().map(|l| l.seq);
        if latest != Some(ticket.seq) {
            debug!(
                controller = self.name,
                seq = ticket.seq,
                ?latest,
                "discarding stale response"
            );
            return Completion::Discarded;
        }

        match result {
            Ok(data) => {
                self.state.data = data;
                self.state.error = None;
            }
            Err(err) => {
                let message = err.to_string();
                warn!(controller = self.name, key = %ticket.key, error = %message, "request failed");
                self.state.error = Some(message);
            }
        }
        self.state.loading = false;
        Completion::Applied
    }

    /// Begin, await `fetch`, and complete in one step
    ///
    /// `fetch` is only invoked when the key changed.
    pub async fn run<F, Fut, E>(&mut self, key: DedupKey, fetch: F) -> &QueryState<D>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<D, E>>,
        E: Display,
    {
        if let Some(ticket) = self.begin(key) {
            let result = fetch().await;
            self.complete(ticket, result);
        }
        &self.state
    }
}
