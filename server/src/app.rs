//! Core application

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use rmcp::ServiceExt;

use crate::api::OrdersToolServer;
use crate::core::cli::{self, CliConfig, Commands};
use crate::core::config::AppConfig;
use crate::core::constants::{APP_NAME_LOWER, ENV_LOG};
use crate::data::OrderStore;

pub struct CoreApp {
    pub config: AppConfig,
    pub store: Arc<OrderStore>,
}

impl CoreApp {
    /// Run the application with CLI argument parsing
    pub async fn run() -> Result<()> {
        dotenvy::dotenv().ok();
        Self::init_logging();

        tracing::debug!("Application starting");

        let (cli_config, command) = cli::parse();
        tracing::trace!(command = ?command, "Parsed command");

        match command {
            Some(Commands::Check { path }) => return Self::check_dataset(&path),
            Some(Commands::Serve) | None => {}
        }

        let app = Self::init(&cli_config)?;
        Self::start_server(app).await
    }

    fn init(cli: &CliConfig) -> Result<Self> {
        let config = AppConfig::load(cli)?;
        let store = OrderStore::load(&config.data_path)
            .with_context(|| format!("Failed to load dataset: {}", config.data_path.display()))?;
        Ok(Self {
            config,
            store: Arc::new(store),
        })
    }

    fn init_logging() {
        let default_filter = format!("info,{}=info", APP_NAME_LOWER);

        let filter = std::env::var(ENV_LOG)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or(default_filter);

        // stdout carries the tool transport, so logs go to stderr
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(false)
            .with_level(true)
            .with_ansi(false)
            .compact()
            .with_env_filter(filter)
            .init();
    }

    async fn start_server(app: Self) -> Result<()> {
        tracing::info!(
            orders = app.store.orders().len(),
            dataset = %app.config.data_path.display(),
            "Serving order tools on stdio"
        );

        let service = OrdersToolServer::new(app.store.clone())
            .serve(rmcp::transport::io::stdio())
            .await
            .context("Failed to start tool server")?;
        service.waiting().await?;

        tracing::debug!("Tool server stopped");
        Ok(())
    }

    fn check_dataset(path: &Path) -> Result<()> {
        let store = OrderStore::load(path)
            .with_context(|| format!("Failed to load dataset: {}", path.display()))?;
        println!("{}: {} orders", path.display(), store.orders().len());
        println!("Products: {}", store.product_names().join(", "));
        Ok(())
    }
}
