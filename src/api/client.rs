//! HTTP client for the catalog API

use super::error::{ApiError, Result};
use super::types::{DataEnvelope, FileInfo, ModelDetail, PageEnvelope, Tag};
use crate::query::{QueryParams, ResourcePage};
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Endpoint paths, relative to the configured host
pub mod endpoints {
    pub const TAGS: &str = "/api/v1/tags";
    pub const MODELS: &str = "/api/v1/models";
    pub const DATASETS: &str = "/api/v1/datasets";
}

/// Async client bound to one catalog host
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: String,
}

impl ApiClient {
    /// Build a client for `base_url` with a per-request timeout
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` if the base URL is not http(s), or
    /// `ApiError::Network` if the TLS backend cannot be initialised.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base = base_url.trim().trim_end_matches('/').to_string();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self { http, base })
    }

    /// Host this client talks to, without trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Absolute URL for an endpoint path
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base, path)
        } else {
            format!("{}/{}", self.base, path)
        }
    }

    /// GET a JSON document
    ///
    /// Any non-2xx status is an error regardless of body. When the body is a
    /// JSON object with a `msg` field it is carried into the error message.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-2xx status, or a body that
    /// does not decode as `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T> {
        let url = self.url(path);
        debug!(%url, ?query, "GET");

        let resp = self
            .http
            .get(&url)
            .query(query)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = resp.status();
        let body = resp.bytes().await?;

        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                message: server_message(&body),
            });
        }

        serde_json::from_slice(&body).map_err(Into::into)
    }

    /// Fetch one page of a list endpoint
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn list_page<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &QueryParams,
    ) -> Result<ResourcePage<T>> {
        let envelope: PageEnvelope<T> = self.get_json(endpoint, &params.to_query()).await?;
        Ok(ResourcePage::new(envelope.data, envelope.total))
    }

    /// Fetch the full, unscoped tag list
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn tags(&self) -> Result<Vec<Tag>> {
        let envelope: DataEnvelope<Vec<Tag>> = self.get_json(endpoints::TAGS, &[]).await?;
        Ok(envelope.data)
    }

    /// Fetch a model's detail record
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn model_detail(&self, path: &str) -> Result<ModelDetail> {
        let envelope: DataEnvelope<ModelDetail> =
            self.get_json(&model_path(path, ""), &[]).await?;
        Ok(envelope.data)
    }

    /// Fetch a model's raw README text
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn model_readme(&self, path: &str) -> Result<String> {
        let envelope: DataEnvelope<String> =
            self.get_json(&model_path(path, "/raw/README.md"), &[]).await?;
        Ok(envelope.data)
    }

    /// Fetch the top-level file tree of a model repository
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn model_tree(&self, path: &str) -> Result<Vec<FileInfo>> {
        let envelope: DataEnvelope<Vec<FileInfo>> =
            self.get_json(&model_path(path, "/tree"), &[]).await?;
        Ok(envelope.data)
    }
}

fn model_path(path: &str, suffix: &str) -> String {
    format!("{}/{}{}", endpoints::MODELS, path.trim_matches('/'), suffix)
}

/// Pull a `msg` string out of an error body, if there is one
fn server_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()?
        .get("msg")?
        .as_str()
        .map(str::to_string)
}
