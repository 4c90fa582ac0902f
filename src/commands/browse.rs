//! Browse command - interactive listing

use crate::{
    CatalogrError,
    api::ApiClient,
    browse::{BrowseSession, SessionConfig},
    query::StrategyRegistry,
    tui,
};

type Result<T> = std::result::Result<T, CatalogrError>;

/// Execute the browse command
///
/// # Errors
/// Returns an error if the terminal cannot be driven.
pub async fn execute(client: ApiClient, config: SessionConfig) -> Result<()> {
    let registry = StrategyRegistry::with_defaults(&client);
    let session = BrowseSession::new(client, registry, config);
    tui::run(session).await?;
    Ok(())
}
