//! Command implementations.

pub mod config;
pub mod generate;
pub mod render;

use anyhow::Result;
use std::path::PathBuf;

use crate::config::Config;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Configuration file path
    pub config_path: PathBuf,

    /// Endpoint overriding `json_rpc`
    pub rpc_url: Option<String>,
}

impl Context {
    /// Load the configuration file and apply command-line overrides.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load(&self.config_path)?;

        if let Some(url) = &self.rpc_url {
            config.json_rpc.clone_from(url);
            config.validate()?;
        }

        Ok(config)
    }
}
