//! Application configuration
//!
//! Resolution order: CLI flag, then environment (handled by clap), then
//! the default dataset file in the working directory.

use std::path::PathBuf;

use anyhow::Result;

use super::cli::CliConfig;
use super::constants::DEFAULT_DATA_FILE;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the orders dataset file
    pub data_path: PathBuf,
}

impl AppConfig {
    pub fn load(cli: &CliConfig) -> Result<Self> {
        let data_path = cli
            .data
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        if !data_path.exists() {
            anyhow::bail!(
                "Dataset file not found: {}. Pass --data or set ORDERDESK_DATA.",
                data_path.display()
            );
        }

        Ok(Self { data_path })
    }
}
