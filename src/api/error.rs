//! API-specific error types
//!
//! Every failure talking to the catalog server lands in one of three buckets:
//!
//! - **`Network`**: the request never produced a response (DNS, refused
//!   connection, timeout)
//! - **`Http`**: the server answered with a status outside 2xx
//! - **`Decode`**: the body was not the JSON shape we expected
//!
//! Callers do not branch on the kind; controllers store the rendered message.

use thiserror::Error;

/// Catalog API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Non-2xx response
    #[error("Request failed with status {status}{}", format_detail(.message.as_deref()))]
    Http {
        status: u16,
        message: Option<String>,
    },

    /// Malformed response body
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Base URL or path could not be turned into a request URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Status code for `Http` errors
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Http {
                status: status.as_u16(),
                message: None,
            }
        } else {
            Self::Network(err)
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

fn format_detail(message: Option<&str>) -> String {
    match message {
        Some(msg) if !msg.is_empty() => format!(": {msg}"),
        _ => String::new(),
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
