//! Bollinger band reversal strategy.
//!
//! Buys when the close falls below the lower band, sells when it rises
//! above the upper band.

use quarks_core::{
    error::StrategyError,
    traits::{MultiOutputIndicator, Strategy, StrategyConfig},
    types::{BarSeries, Side},
};
use quarks_indicators::BollingerBands;
use serde::{Deserialize, Serialize};

/// Configuration for the Bollinger band strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BollingerConfig {
    /// Band period
    pub period: usize,
    /// Standard deviation multiplier
    pub dev_factor: f64,
}

impl Default for BollingerConfig {
    fn default() -> Self {
        Self {
            period: 20,
            dev_factor: 2.0,
        }
    }
}

impl StrategyConfig for BollingerConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        if self.period < 2 {
            return Err(StrategyError::InvalidConfig(
                "Band period must be at least 2".into(),
            ));
        }
        if self.dev_factor <= 0.0 {
            return Err(StrategyError::InvalidConfig(
                "Deviation factor must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Bollinger band reversal strategy.
pub struct BollingerStrategy {
    config: BollingerConfig,
    bands: BollingerBands,
}

impl BollingerStrategy {
    /// Create a new Bollinger band strategy.
    pub fn new(config: BollingerConfig) -> Self {
        let bands = BollingerBands::with_params(config.period, config.dev_factor);
        Self { config, bands }
    }
}

impl Strategy for BollingerStrategy {
    fn name(&self) -> &str {
        "Bollinger Bands"
    }

    fn description(&self) -> &str {
        "Buys below the lower band, sells above the upper band"
    }

    fn on_bar(&mut self, series: &BarSeries, in_position: bool) -> Option<Side> {
        if series.len() < self.warmup_period() {
            return None;
        }

        let closes = series.closes();
        let outputs = self.bands.calculate(&closes);
        let bands = outputs.last()?;
        let close = series.last()?.close;

        if !in_position && close < bands.lower {
            Some(Side::Buy)
        } else if in_position && close > bands.upper {
            Some(Side::Sell)
        } else {
            None
        }
    }

    fn warmup_period(&self) -> usize {
        self.config.period
    }
}
