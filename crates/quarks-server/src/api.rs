//! Request and response shapes for the backtest API.

use quarks_backtest::BacktestStats;
use quarks_core::types::{Bar, Side, TradeRecord};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_ticker() -> String {
    "AAPL".to_string()
}

fn default_start_date() -> String {
    "2020-01-01".to_string()
}

fn default_end_date() -> String {
    "2023-01-01".to_string()
}

fn default_strategy() -> String {
    "sma-crossover".to_string()
}

fn default_initial_cash() -> f64 {
    100_000.0
}

fn default_commission() -> f64 {
    0.001
}

fn default_position_sizing() -> String {
    "percent".to_string()
}

fn default_position_value() -> f64 {
    95.0
}

/// Backtest run request. Every field has the API's documented default.
#[derive(Debug, Clone, Deserialize)]
pub struct BacktestRequest {
    #[serde(default = "default_ticker")]
    pub ticker: String,
    #[serde(default = "default_start_date")]
    pub start_date: String,
    #[serde(default = "default_end_date")]
    pub end_date: String,
    #[serde(default = "default_strategy")]
    pub strategy: String,
    #[serde(default = "default_initial_cash")]
    pub initial_cash: f64,
    #[serde(default = "default_commission")]
    pub commission: f64,
    #[serde(default = "default_position_sizing")]
    pub position_sizing: String,
    #[serde(default = "default_position_value")]
    pub position_value: f64,
    /// Overrides for the `custom` strategy only
    #[serde(default)]
    pub custom_params: serde_json::Value,
}

impl Default for BacktestRequest {
    fn default() -> Self {
        serde_json::from_value(serde_json::json!({})).expect("defaults are valid")
    }
}

/// Start/end portfolio values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub starting_value: f64,
    pub ending_value: f64,
    pub total_return: f64,
    pub total_return_pct: f64,
}

/// Summary performance metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub sharpe_ratio: f64,
    pub max_drawdown: f64,
    pub total_trades: usize,
    pub winning_trades: usize,
    pub losing_trades: usize,
    pub win_rate: f64,
    pub avg_trade: f64,
}

/// An executed trade as exposed to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeItem {
    pub date: String,
    #[serde(rename = "type")]
    pub side: Side,
    pub price: f64,
    pub size: f64,
    pub value: f64,
    pub commission: f64,
}

/// Day-by-day series for charting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    pub dates: Vec<String>,
    pub prices: Vec<f64>,
    pub portfolio_values: Vec<f64>,
    pub trades: Vec<TradeItem>,
}

/// Backtest run response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestResponse {
    pub success: bool,
    pub portfolio: PortfolioSummary,
    pub metrics: MetricsSummary,
    pub chart_data: ChartData,
}

/// Strategy listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategiesResponse {
    pub strategies: Vec<quarks_strategies::StrategyInfo>,
    pub total: usize,
}

/// Convert a Decimal money amount to the wire's float representation.
pub(crate) fn to_f64(value: Decimal) -> f64 {
    value.to_string().parse().unwrap_or(0.0)
}

impl BacktestResponse {
    /// Shape engine output into the response JSON.
    pub(crate) fn build(
        stats: &BacktestStats,
        bars: &[Bar],
        portfolio_values: Vec<Decimal>,
    ) -> Self {
        let dates: Vec<String> = bars
            .iter()
            .map(|b| b.date().format("%Y-%m-%d").to_string())
            .collect();
        let prices: Vec<f64> = bars.iter().map(|b| b.close).collect();

        let trades = stats
            .trades
            .iter()
            .map(|t: &TradeRecord| TradeItem {
                date: t.date.format("%Y-%m-%d").to_string(),
                side: t.side,
                price: to_f64(t.price),
                size: to_f64(t.size),
                value: to_f64(t.value),
                commission: to_f64(t.commission),
            })
            .collect();

        Self {
            success: true,
            portfolio: PortfolioSummary {
                starting_value: to_f64(stats.initial_cash),
                ending_value: to_f64(stats.final_equity),
                total_return: to_f64(stats.total_return),
                total_return_pct: to_f64(stats.total_return_pct),
            },
            metrics: MetricsSummary {
                sharpe_ratio: stats.sharpe_ratio,
                max_drawdown: to_f64(stats.max_drawdown_pct),
                total_trades: stats.total_trades,
                winning_trades: stats.winning_trades,
                losing_trades: stats.losing_trades,
                win_rate: to_f64(stats.win_rate_pct),
                avg_trade: to_f64(stats.avg_trade),
            },
            chart_data: ChartData {
                dates,
                prices,
                portfolio_values: portfolio_values.into_iter().map(to_f64).collect(),
                trades,
            },
        }
    }
}
