//! Request handlers.

use axum::extract::State;
use axum::Json;
use chrono::NaiveDate;
use quarks_backtest::{equity, BacktestConfig, BacktestEngine};
use quarks_sizing::PositionSizing;
use rust_decimal::Decimal;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::api::{BacktestRequest, BacktestResponse, StrategiesResponse};
use crate::error::ApiError;
use crate::state::AppState;

const FALLBACK_STRATEGY: &str = "sma-crossover";

fn parse_date(value: &str, field: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ApiError::bad_request(format!("Invalid {field}: {value}")))
}

fn parse_money(value: f64, field: &str) -> Result<Decimal, ApiError> {
    Decimal::try_from(value).map_err(|_| ApiError::bad_request(format!("Invalid {field}: {value}")))
}

/// Run a backtest and shape the engine output into the chart-ready JSON.
pub async fn run_backtest(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BacktestRequest>,
) -> Result<Json<BacktestResponse>, ApiError> {
    let ticker = request.ticker.trim().to_uppercase();
    if ticker.is_empty() {
        return Err(ApiError::bad_request("Ticker must not be empty"));
    }

    let start = parse_date(&request.start_date, "start date")?;
    let end = parse_date(&request.end_date, "end date")?;
    if end <= start {
        return Err(ApiError::bad_request("End date must be after start date"));
    }

    if request.initial_cash <= 0.0 {
        return Err(ApiError::bad_request("Initial cash must be positive"));
    }
    if request.commission < 0.0 {
        return Err(ApiError::bad_request("Commission must not be negative"));
    }

    let position_value = parse_money(request.position_value, "position value")?;
    let sizing = PositionSizing::from_request(&request.position_sizing, position_value)
        .ok_or_else(|| {
            ApiError::bad_request(format!(
                "Unknown position sizing: {}",
                request.position_sizing
            ))
        })?;

    // Unknown strategy ids fall back to the default strategy
    let strategy_id = if state.registry.exists(&request.strategy) {
        request.strategy.as_str()
    } else {
        FALLBACK_STRATEGY
    };
    let mut strategy = if strategy_id == "custom" && request.custom_params.is_object() {
        state
            .registry
            .create_with_overrides(strategy_id, &request.custom_params)?
    } else {
        state.registry.create_default(strategy_id)?
    };

    info!(%ticker, strategy = strategy_id, %start, %end, "running backtest");
    let bars = state.data.daily_bars(&ticker, start, end).await?;

    let initial_cash = parse_money(request.initial_cash, "initial cash")?;
    let config = BacktestConfig {
        initial_cash,
        commission_rate: parse_money(request.commission, "commission")?,
        sizing,
        risk_free_rate: state.settings.risk_free_rate,
    };
    let engine = BacktestEngine::new(config);
    let report = engine.run(strategy.as_mut(), &ticker, &bars)?;

    // Recompute the portfolio series from the trade log for the chart
    let portfolio_values = equity::replay_portfolio_values(initial_cash, &bars, &report.stats.trades);

    info!(
        %ticker,
        total_return_pct = %report.stats.total_return_pct,
        trades = report.stats.trades.len(),
        "backtest completed"
    );

    Ok(Json(BacktestResponse::build(
        &report.stats,
        &bars,
        portfolio_values,
    )))
}

/// List the available strategies.
pub async fn list_strategies(
    State(state): State<Arc<AppState>>,
) -> Json<StrategiesResponse> {
    let strategies = state.registry.list().to_vec();
    let total = strategies.len();
    Json(StrategiesResponse { strategies, total })
}

/// Liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
