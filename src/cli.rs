use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

/// Terminal reader for sports articles.
#[derive(Debug, Parser)]
#[command(name = "newsdesk", version, about)]
pub struct Cli {
    /// Override the article API base URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Read configuration from PATH instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        match &self.endpoint {
            Some(endpoint) => config.with_endpoint(endpoint.clone()),
            None => Ok(config),
        }
    }
}
