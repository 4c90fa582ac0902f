//! Catalogr CLI application entry point
//!
//! This is the main executable for catalogr. It provides a command-line
//! interface for browsing the models and datasets of a catalog hub.
//!
//! # Usage
//!
//! ```bash
//! # Browse interactively (default command)
//! catalogr
//! catalogr browse /datasets
//!
//! # Print one page
//! catalogr list models --page 2 --search llama
//!
//! # Tags for a scope
//! catalogr tags datasets --category task
//!
//! # Model detail, README and files
//! catalogr show owner/model
//!
//! # Quiet mode (only output results)
//! catalogr -q list datasets
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/catalogr/config.toml` on Linux). `catalogr config init` runs
//! the interactive setup; the browser runs it automatically on first use.

use catalogr::{
    CatalogrError,
    api::ApiClient,
    browse::SessionConfig,
    cli::{Cli, Commands},
    commands,
    config::CatalogrConfig,
    logging::{self, LogTarget},
    query::QueryParams,
};

type Result<T> = std::result::Result<T, CatalogrError>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let command = cli.get_command();

    let target = if matches!(command, Commands::Browse { .. }) {
        LogTarget::File
    } else {
        LogTarget::Stderr
    };
    logging::init(cli.verbose, target)?;

    match &command {
        Commands::Completions { shell } => {
            commands::completions(*shell);
            return Ok(());
        }
        Commands::Config { command } => {
            return commands::config(command, cli.quiet);
        }
        _ => {}
    }

    let config = if matches!(command, Commands::Browse { .. }) {
        CatalogrConfig::load_or_setup()?
    } else {
        CatalogrConfig::load()?
    };
    let quiet = cli.quiet || config.quiet;

    let host = cli.api_host.as_deref().unwrap_or(&config.api_host);
    let client = ApiClient::new(host, config.request_timeout())?;

    match command {
        Commands::Browse { route } => {
            let session = SessionConfig {
                route,
                page_size: config.page_size,
                debounce: config.debounce(),
            };
            commands::browse(client, session).await
        }
        Commands::List {
            scope,
            page,
            search,
            page_size,
        } => {
            let mut params = QueryParams::new(page, page_size.unwrap_or(config.page_size));
            if let Some(search) = search {
                params = params.with_search(search);
            }
            commands::list(&client, &scope, &params, quiet).await
        }
        Commands::Tags { scope, category } => {
            commands::tags(&client, &scope, category.as_deref(), quiet).await
        }
        Commands::Show {
            path,
            no_readme,
            no_tree,
        } => commands::show(&client, &path, !no_readme, !no_tree, quiet).await,
        Commands::Config { .. } | Commands::Completions { .. } => Ok(()),
    }
}
