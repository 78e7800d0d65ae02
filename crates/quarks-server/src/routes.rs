//! Router assembly.

use crate::handlers::{health, list_strategies, run_backtest};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Build the API router.
///
/// Browser clients are served from another origin, so CORS is permissive.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/backtest", post(run_backtest))
        .route("/api/strategies", get(list_strategies))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
