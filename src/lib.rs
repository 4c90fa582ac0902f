//! Catalogr - a terminal browser for model and dataset catalogs
//!
//! This library holds the client side of a catalog hub: typed access to its
//! HTTP API, deduplicated and race-safe listing queries, debounced search,
//! tag grouping, and the page-window algorithm used by every frontend.

use thiserror::Error;

pub mod api;
pub mod browse;
pub mod cli;
pub mod commands;
pub mod config;
pub mod debounce;
pub mod logging;
pub mod output;
pub mod pagination;
pub mod query;
pub mod tags;
pub mod tui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum CatalogrError {
    /// Catalog API error
    #[error("API error: {0}")]
    ApiError(#[from] api::ApiError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] tui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for catalogr operations
pub type Result<T> = std::result::Result<T, CatalogrError>;
