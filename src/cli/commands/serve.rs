//! Serve command implementation.

use anyhow::{Context, Result};
use quarks_core::traits::DataSource;
use quarks_data::YahooDataSource;
use quarks_server::{AppState, Settings};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::cli::ServeArgs;

pub async fn run(args: ServeArgs, config_path: Option<&Path>) -> Result<()> {
    let mut settings = Settings::load(config_path).context("Failed to load settings")?;

    if let Some(host) = args.host {
        settings.host = host;
    }
    if let Some(port) = args.port {
        settings.port = port;
    }

    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port)
        .parse()
        .context("Invalid bind address")?;

    let data = Arc::new(YahooDataSource::new().context("Failed to build data source")?);
    info!(source = data.name(), "starting API server");

    let state = Arc::new(AppState::new(data, settings));
    quarks_server::serve(state, addr).await
}
