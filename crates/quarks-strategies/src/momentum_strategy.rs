//! Momentum sign strategy.
//!
//! Buys while N-period momentum is positive, sells when it turns
//! negative.

use quarks_core::{
    error::StrategyError,
    traits::{Indicator, Strategy, StrategyConfig},
    types::{BarSeries, Side},
};
use quarks_indicators::Momentum;
use serde::{Deserialize, Serialize};

/// Configuration for the momentum strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MomentumConfig {
    /// Momentum lookback period
    pub period: usize,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self { period: 10 }
    }
}

impl StrategyConfig for MomentumConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        if self.period == 0 {
            return Err(StrategyError::InvalidConfig(
                "Momentum period must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// Momentum sign strategy.
pub struct MomentumStrategy {
    config: MomentumConfig,
    momentum: Momentum,
}

impl MomentumStrategy {
    /// Create a new momentum strategy.
    pub fn new(config: MomentumConfig) -> Self {
        let momentum = Momentum::new(config.period);
        Self { config, momentum }
    }
}

impl Strategy for MomentumStrategy {
    fn name(&self) -> &str {
        "Momentum"
    }

    fn description(&self) -> &str {
        "Buys positive momentum, sells when momentum turns negative"
    }

    fn on_bar(&mut self, series: &BarSeries, in_position: bool) -> Option<Side> {
        if series.len() < self.warmup_period() {
            return None;
        }

        let closes = series.closes();
        let values = self.momentum.calculate(&closes);
        let current = *values.last()?;

        if !in_position && current > 0.0 {
            Some(Side::Buy)
        } else if in_position && current < 0.0 {
            Some(Side::Sell)
        } else {
            None
        }
    }

    fn warmup_period(&self) -> usize {
        self.config.period + 1
    }
}
