//! Technical indicators.
//!
//! This crate provides the indicators the strategy rules are built from:
//! - Moving averages (SMA, EMA)
//! - Momentum indicators (Momentum, RSI, MACD, Stochastic)
//! - Volatility indicators (Bollinger Bands, Standard Deviation)

pub mod momentum;
pub mod moving_average;
pub mod volatility;

pub use momentum::{Macd, MacdOutput, Momentum, Rsi, Stochastic, StochasticOutput};
pub use moving_average::{Ema, Sma};
pub use volatility::{BollingerBands, BollingerOutput, StdDev};
