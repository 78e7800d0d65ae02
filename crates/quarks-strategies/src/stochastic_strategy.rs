//! Stochastic oscillator strategy.
//!
//! Buys when %K falls below the oversold level, sells when it rises
//! above the overbought level.

use quarks_core::{
    error::StrategyError,
    traits::{Strategy, StrategyConfig},
    types::{BarSeries, Side},
};
use quarks_indicators::Stochastic;
use serde::{Deserialize, Serialize};

/// Configuration for the stochastic strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StochasticConfig {
    /// %K lookback period
    pub period: usize,
    /// %D smoothing period
    pub period_dfast: usize,
    /// Buy below this %K level
    pub oversold: f64,
    /// Sell above this %K level
    pub overbought: f64,
}

impl Default for StochasticConfig {
    fn default() -> Self {
        Self {
            period: 14,
            period_dfast: 3,
            oversold: 20.0,
            overbought: 80.0,
        }
    }
}

impl StrategyConfig for StochasticConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        if self.period == 0 || self.period_dfast == 0 {
            return Err(StrategyError::InvalidConfig(
                "Stochastic periods must be greater than 0".into(),
            ));
        }
        if self.overbought <= self.oversold {
            return Err(StrategyError::InvalidConfig(
                "Overbought must be greater than oversold".into(),
            ));
        }
        Ok(())
    }
}

/// Stochastic oscillator strategy.
pub struct StochasticStrategy {
    config: StochasticConfig,
    stochastic: Stochastic,
}

impl StochasticStrategy {
    /// Create a new stochastic strategy.
    pub fn new(config: StochasticConfig) -> Self {
        let stochastic = Stochastic::with_periods(config.period, config.period_dfast);
        Self { config, stochastic }
    }
}

impl Strategy for StochasticStrategy {
    fn name(&self) -> &str {
        "Stochastic"
    }

    fn description(&self) -> &str {
        "Buys oversold %K levels, sells overbought levels"
    }

    fn on_bar(&mut self, series: &BarSeries, in_position: bool) -> Option<Side> {
        if series.len() < self.warmup_period() {
            return None;
        }

        let outputs =
            self.stochastic
                .calculate_ohlc(&series.highs(), &series.lows(), &series.closes());
        let current = outputs.last()?;

        if !in_position && current.k < self.config.oversold {
            Some(Side::Buy)
        } else if in_position && current.k > self.config.overbought {
            Some(Side::Sell)
        } else {
            None
        }
    }

    fn warmup_period(&self) -> usize {
        self.config.period + self.config.period_dfast - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::collect_signals;

    #[test]
    fn test_config_validation() {
        let mut config = StochasticConfig::default();
        assert!(config.validate().is_ok());

        config.oversold = 80.0;
        config.overbought = 20.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_decline_buys() {
        let mut strategy = StochasticStrategy::new(StochasticConfig {
            period: 5,
            period_dfast: 3,
            oversold: 20.0,
            overbought: 80.0,
        });

        // A sustained decline pins %K near zero
        let prices: Vec<f64> = (0..12).map(|i| 100.0 - 2.0 * i as f64).collect();
        let signals = collect_signals(&mut strategy, &prices);

        assert_eq!(signals.first().map(|(_, s)| *s), Some(Side::Buy));
    }

    #[test]
    fn test_rally_sells() {
        let mut strategy = StochasticStrategy::new(StochasticConfig {
            period: 5,
            period_dfast: 3,
            oversold: 20.0,
            overbought: 80.0,
        });

        let mut prices: Vec<f64> = (0..10).map(|i| 100.0 - 2.0 * i as f64).collect();
        prices.extend((0..10).map(|i| 82.0 + 3.0 * i as f64));
        let signals = collect_signals(&mut strategy, &prices);

        let sides: Vec<Side> = signals.iter().map(|(_, s)| *s).collect();
        assert!(sides.windows(2).any(|w| w == [Side::Buy, Side::Sell]));
    }
}
