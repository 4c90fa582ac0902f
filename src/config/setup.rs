//! Interactive setup wizard for first-time configuration
//!
//! This module handles the interactive prompts for creating an initial
//! configuration when catalogr is run for the first time.

use super::{CatalogrConfig, DEFAULT_API_HOST};
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};

/// Interactive first-time setup - prompts for the catalog host and page size
///
/// Guides the user through creating their configuration:
/// 1. Prompts for the API host (default: `http://localhost:8080`)
/// 2. Prompts for rows per page (default: 20)
/// 3. Validates and saves the configuration
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - User input cannot be read
/// - The host is not an http(s) URL
/// - The configuration cannot be saved
pub fn first_time_setup() -> Result<CatalogrConfig, ConfigError> {
    println!("Welcome to catalogr! Let's point it at a catalog.\n");

    let api_host: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("API host")
        .default(DEFAULT_API_HOST.to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let page_size: u32 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Rows per page")
        .default(CatalogrConfig::default().page_size)
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let mut config = CatalogrConfig {
        page_size,
        ..CatalogrConfig::default()
    };
    config.set_api_host(&api_host)?;
    config.validate()?;

    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}
