//! Core data types for the backtesting service.

mod ohlcv;
mod trade;

pub use ohlcv::{Bar, BarSeries};
pub use trade::{Side, TradeRecord};
