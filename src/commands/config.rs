//! Config command - create, print or edit the configuration

use crate::{
    CatalogrError,
    cli::ConfigCommands,
    config::{self, CatalogrConfig},
};
use ::config::ConfigError;

type Result<T> = std::result::Result<T, CatalogrError>;

/// Execute a config subcommand
///
/// # Errors
/// Returns an error if the configuration cannot be read, validated or saved.
pub fn execute(command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Init => {
            config::first_time_setup()?;
        }
        ConfigCommands::Show => {
            let current = CatalogrConfig::load()?;
            if !quiet {
                println!("# {}", CatalogrConfig::config_path()?.display());
            }
            print!("{}", render(&current)?);
        }
        ConfigCommands::SetHost { url } => {
            let mut current = CatalogrConfig::load()?;
            current.set_api_host(url)?;
            current.save()?;
            if !quiet {
                println!("API host set to {}", current.api_host);
            }
        }
    }
    Ok(())
}

/// Configuration as it would be written to disk
///
/// # Errors
/// Returns an error if the configuration cannot be serialized.
pub fn render(config: &CatalogrConfig) -> Result<String> {
    toml::to_string_pretty(config)
        .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")).into())
}
