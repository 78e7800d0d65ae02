//! HTTP API for the backtesting service.
//!
//! Exposes `POST /api/backtest` to configure and run a strategy over
//! historical daily bars, plus a registry listing and a health probe.

mod api;
mod error;
mod handlers;
mod routes;
mod settings;
mod state;

pub use api::{BacktestRequest, BacktestResponse};
pub use error::ApiError;
pub use routes::router;
pub use settings::Settings;
pub use state::AppState;

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Bind and serve the API until shutdown.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> anyhow::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
