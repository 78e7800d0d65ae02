//! Mean reversion strategy.
//!
//! Measures the close's z-score against a rolling mean and buys deep
//! negative deviations, selling deep positive ones.

use quarks_core::{
    error::StrategyError,
    traits::{Indicator, Strategy, StrategyConfig},
    types::{BarSeries, Side},
};
use quarks_indicators::{Sma, StdDev};
use serde::{Deserialize, Serialize};

/// Configuration for the mean reversion strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeanReversionConfig {
    /// Rolling window period
    pub period: usize,
    /// Z-score threshold for entries and exits
    pub threshold: f64,
}

impl Default for MeanReversionConfig {
    fn default() -> Self {
        Self {
            period: 20,
            threshold: 2.0,
        }
    }
}

impl StrategyConfig for MeanReversionConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        if self.period < 2 {
            return Err(StrategyError::InvalidConfig(
                "Period must be at least 2".into(),
            ));
        }
        if self.threshold <= 0.0 {
            return Err(StrategyError::InvalidConfig(
                "Threshold must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Mean reversion strategy.
pub struct MeanReversionStrategy {
    config: MeanReversionConfig,
}

impl MeanReversionStrategy {
    /// Create a new mean reversion strategy.
    pub fn new(config: MeanReversionConfig) -> Self {
        Self { config }
    }
}

impl Strategy for MeanReversionStrategy {
    fn name(&self) -> &str {
        "Mean Reversion"
    }

    fn description(&self) -> &str {
        "Buys deep negative z-scores of price vs its rolling mean"
    }

    fn on_bar(&mut self, series: &BarSeries, in_position: bool) -> Option<Side> {
        if series.len() < self.warmup_period() {
            return None;
        }

        let closes = series.closes();
        let mean = *Sma::new(self.config.period).calculate(&closes).last()?;
        let std_dev = *StdDev::new(self.config.period).calculate(&closes).last()?;

        // Zero deviation means no signal either way
        if std_dev == 0.0 {
            return None;
        }

        let close = series.last()?.close;
        let deviation = (close - mean) / std_dev;

        if !in_position && deviation < -self.config.threshold {
            Some(Side::Buy)
        } else if in_position && deviation > self.config.threshold {
            Some(Side::Sell)
        } else {
            None
        }
    }

    fn warmup_period(&self) -> usize {
        self.config.period
    }
}
