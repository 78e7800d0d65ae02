//! MACD signal-line strategy.
//!
//! Buys while the MACD line is above its signal line, sells when it
//! falls back below.

use quarks_core::{
    error::StrategyError,
    traits::{MultiOutputIndicator, Strategy, StrategyConfig},
    types::{BarSeries, Side},
};
use quarks_indicators::Macd;
use serde::{Deserialize, Serialize};

/// Configuration for the MACD strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacdConfig {
    /// Fast EMA period
    pub fast: usize,
    /// Slow EMA period
    pub slow: usize,
    /// Signal line EMA period
    pub signal: usize,
}

impl Default for MacdConfig {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

impl StrategyConfig for MacdConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        if self.fast == 0 || self.slow == 0 || self.signal == 0 {
            return Err(StrategyError::InvalidConfig(
                "MACD periods must be greater than 0".into(),
            ));
        }
        if self.fast >= self.slow {
            return Err(StrategyError::InvalidConfig(
                "Fast period must be less than slow period".into(),
            ));
        }
        Ok(())
    }
}

/// MACD signal-line strategy.
pub struct MacdStrategy {
    config: MacdConfig,
    macd: Macd,
}

impl MacdStrategy {
    /// Create a new MACD strategy.
    pub fn new(config: MacdConfig) -> Self {
        let macd = Macd::with_periods(config.fast, config.slow, config.signal);
        Self { config, macd }
    }
}

impl Strategy for MacdStrategy {
    fn name(&self) -> &str {
        "MACD"
    }

    fn description(&self) -> &str {
        "Buys when the MACD line is above its signal line, sells below"
    }

    fn on_bar(&mut self, series: &BarSeries, in_position: bool) -> Option<Side> {
        if series.len() < self.warmup_period() {
            return None;
        }

        let closes = series.closes();
        let outputs = self.macd.calculate(&closes);
        let current = outputs.last()?;

        if !in_position && current.macd > current.signal {
            Some(Side::Buy)
        } else if in_position && current.macd < current.signal {
            Some(Side::Sell)
        } else {
            None
        }
    }

    fn warmup_period(&self) -> usize {
        self.config.slow + self.config.signal
    }
}
