//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for catalogr using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive listing with debounced search (default)
//! - **list**: Print one page of models or datasets
//! - **tags**: Print the tag sidebar for a scope
//! - **show**: Print a model's detail, README and file tree
//! - **config**: Create, print or edit the configuration
//! - **completions**: Generate shell completion scripts
//!
//! # Examples
//!
//! ```ignore
//! use catalogr::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_args();
//! if let Commands::List { scope, page, .. } = cli.get_command() {
//!     println!("{scope} page {page}");
//! }
//! ```

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Route opened when no command is given
pub const DEFAULT_ROUTE: &str = "/models";

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "catalogr")]
#[command(about = "Browse model and dataset catalogs from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log debug output (to stderr, or the log file in browse mode)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Catalog host (overrides config)
    #[arg(long = "api-host", value_name = "URL", env = "CATALOGR_API_HOST", global = true)]
    pub api_host: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive browser (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Route to open, e.g. /models or /datasets
        #[arg(value_name = "ROUTE", default_value = DEFAULT_ROUTE)]
        route: String,
    },

    /// Print one page of a listing
    #[command(visible_alias = "ls")]
    List {
        /// Resource kind: models or datasets
        #[arg(value_name = "SCOPE", default_value = "models")]
        scope: String,

        /// Page to fetch, starting at 1
        #[arg(short = 'p', long = "page", default_value_t = 1)]
        page: u32,

        /// Only rows matching this text
        #[arg(short = 's', long = "search", value_name = "TEXT")]
        search: Option<String>,

        /// Rows per page (overrides config)
        #[arg(short = 'n', long = "page-size", value_name = "N")]
        page_size: Option<u32>,
    },

    /// Print tags for a scope, grouped by category
    Tags {
        /// Resource kind: models or datasets
        #[arg(value_name = "SCOPE", default_value = "models")]
        scope: String,

        /// Only this category
        #[arg(short = 'c', long = "category", value_name = "CATEGORY")]
        category: Option<String>,
    },

    /// Print a model's detail page
    Show {
        /// Model path, e.g. owner/name
        #[arg(value_name = "PATH")]
        path: String,

        /// Skip the README
        #[arg(long = "no-readme")]
        no_readme: bool,

        /// Skip the file tree
        #[arg(long = "no-tree")]
        no_tree: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Run the interactive setup and save the result
    Init,

    /// Print the effective configuration
    Show,

    /// Change the catalog host
    #[command(name = "set-host")]
    SetHost {
        /// New host, e.g. https://hub.example.com
        #[arg(value_name = "URL")]
        url: String,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            route: DEFAULT_ROUTE.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_command_defaults_to_browse() {
        let cli = Cli::try_parse_from(["catalogr"]).unwrap();
        assert_eq!(
            cli.get_command(),
            Commands::Browse {
                route: "/models".to_string()
            }
        );
    }

    #[test]
    fn test_list_arguments() {
        let cli = Cli::try_parse_from([
            "catalogr", "ls", "datasets", "-p", "3", "--search", "qa", "-n", "5",
        ])
        .unwrap();
        assert_eq!(
            cli.get_command(),
            Commands::List {
                scope: "datasets".to_string(),
                page: 3,
                search: Some("qa".to_string()),
                page_size: Some(5),
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "catalogr",
            "tags",
            "-q",
            "--api-host",
            "http://hub:9000",
        ])
        .unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.api_host.as_deref(), Some("http://hub:9000"));
    }

    #[test]
    fn test_config_set_host() {
        let cli = Cli::try_parse_from(["catalogr", "config", "set-host", "https://x"]).unwrap();
        assert_eq!(
            cli.get_command(),
            Commands::Config {
                command: ConfigCommands::SetHost {
                    url: "https://x".to_string()
                }
            }
        );
    }

    #[test]
    fn test_completions_rejects_unknown_shell() {
        assert!(Cli::try_parse_from(["catalogr", "completions", "cmd.exe"]).is_err());
    }
}
