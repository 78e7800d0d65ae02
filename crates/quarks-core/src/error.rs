//! Error types for the backtesting service.

use thiserror::Error;

/// Top-level service error.
#[derive(Error, Debug)]
pub enum QuarksError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Strategy error: {0}")]
    Strategy(#[from] StrategyError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Backtest error: {0}")]
    Backtest(#[from] BacktestError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Strategy-specific errors.
#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Strategy not found: {0}")]
    NotFound(String),
}

/// Data source errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("No data found for {symbol}")]
    NoData { symbol: String },

    #[error("Invalid date range: {start} to {end}")]
    InvalidRange { start: String, end: String },

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Backtest execution errors.
#[derive(Error, Debug)]
pub enum BacktestError {
    #[error("No bars to process")]
    EmptySeries,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for service operations.
pub type QuarksResult<T> = Result<T, QuarksError>;
