//! Catalog API access
//!
//! A thin async client over the `/api/v1` endpoints plus the wire types they
//! return. Nothing here deduplicates or orders requests; that lives in
//! [`crate::query`].

pub mod client;
pub mod error;
pub mod types;

pub use client::{ApiClient, endpoints};
pub use error::ApiError;
pub use types::{Dataset, FileInfo, Model, ModelDetail, Tag};
