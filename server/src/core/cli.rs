use clap::{Parser, Subcommand};

use std::path::PathBuf;

use super::constants::ENV_DATA;

#[derive(Parser)]
#[command(name = "orderdesk")]
#[command(version, about = "Order filtering tool server", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the orders dataset (JSON array of orders)
    #[arg(long, short = 'd', global = true, env = ENV_DATA)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Serve the order tools over stdio (default command)
    Serve,
    /// Validate a dataset file and print its product universe
    Check {
        /// Path to the dataset file to check
        path: PathBuf,
    },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub data: Option<PathBuf>,
}

/// Parse CLI arguments and return config with command
pub fn parse() -> (CliConfig, Option<Commands>) {
    let cli = Cli::parse();
    let config = CliConfig { data: cli.data };
    (config, cli.command)
}
