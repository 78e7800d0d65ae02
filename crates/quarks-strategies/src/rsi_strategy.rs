//! RSI overbought/oversold strategy.
//!
//! Buys when RSI drops below the oversold level, sells when it rises
//! above the overbought level.

use quarks_core::{
    error::StrategyError,
    traits::{Indicator, Strategy, StrategyConfig},
    types::{BarSeries, Side},
};
use quarks_indicators::Rsi;
use serde::{Deserialize, Serialize};

/// Configuration for the RSI strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsiConfig {
    /// RSI calculation period
    pub period: usize,
    /// Buy below this level
    pub oversold: f64,
    /// Sell above this level
    pub overbought: f64,
}

impl Default for RsiConfig {
    fn default() -> Self {
        Self {
            period: 14,
            oversold: 30.0,
            overbought: 70.0,
        }
    }
}

impl StrategyConfig for RsiConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        if self.period < 2 {
            return Err(StrategyError::InvalidConfig(
                "RSI period must be at least 2".into(),
            ));
        }
        if self.overbought <= self.oversold {
            return Err(StrategyError::InvalidConfig(
                "Overbought must be greater than oversold".into(),
            ));
        }
        if self.overbought > 100.0 || self.oversold < 0.0 {
            return Err(StrategyError::InvalidConfig(
                "RSI thresholds must be between 0 and 100".into(),
            ));
        }
        Ok(())
    }
}

/// RSI overbought/oversold strategy.
pub struct RsiStrategy {
    config: RsiConfig,
    rsi: Rsi,
}

impl RsiStrategy {
    /// Create a new RSI strategy.
    pub fn new(config: RsiConfig) -> Self {
        let rsi = Rsi::new(config.period);
        Self { config, rsi }
    }
}

impl Strategy for RsiStrategy {
    fn name(&self) -> &str {
        "RSI"
    }

    fn description(&self) -> &str {
        "Buys oversold RSI levels, sells overbought levels"
    }

    fn on_bar(&mut self, series: &BarSeries, in_position: bool) -> Option<Side> {
        if series.len() < self.warmup_period() {
            return None;
        }

        let closes = series.closes();
        let rsi_values = self.rsi.calculate(&closes);
        let current = *rsi_values.last()?;

        if !in_position && current < self.config.oversold {
            Some(Side::Buy)
        } else if in_position && current > self.config.overbought {
            Some(Side::Sell)
        } else {
            None
        }
    }

    fn warmup_period(&self) -> usize {
        self.config.period + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::collect_signals;

    #[test]
    fn test_config_validation() {
        let mut config = RsiConfig::default();
        assert!(config.validate().is_ok());

        config.oversold = 70.0;
        config.overbought = 30.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_buys_when_oversold() {
        let config = RsiConfig {
            period: 5,
            oversold: 30.0,
            overbought: 70.0,
        };
        let mut strategy = RsiStrategy::new(config);

        // A steady decline drives RSI toward zero
        let prices: Vec<f64> = (0..12).map(|i| 100.0 - i as f64).collect();
        let signals = collect_signals(&mut strategy, &prices);

        assert_eq!(signals.first().map(|(_, s)| *s), Some(Side::Buy));
    }

    #[test]
    fn test_sells_when_overbought() {
        let config = RsiConfig {
            period: 5,
            oversold: 30.0,
            overbought: 70.0,
        };
        let mut strategy = RsiStrategy::new(config);

        // Decline (buy) then strong rally (sell)
        let mut prices: Vec<f64> = (0..10).map(|i| 100.0 - i as f64).collect();
        prices.extend((0..12).map(|i| 91.0 + 2.0 * i as f64));
        let signals = collect_signals(&mut strategy, &prices);

        let sides: Vec<Side> = signals.iter().map(|(_, s)| *s).collect();
        assert!(sides.windows(2).any(|w| w == [Side::Buy, Side::Sell]));
    }

    #[test]
    fn test_no_entry_while_holding() {
        let config = RsiConfig {
            period: 5,
            oversold: 30.0,
            overbought: 70.0,
        };
        let mut strategy = RsiStrategy::new(config);

        let prices: Vec<f64> = (0..15).map(|i| 100.0 - i as f64).collect();
        let full = crate::test_util::series_from_closes(&prices);

        // Holding: a falling market must not emit another buy
        let mut series = quarks_core::types::BarSeries::new("TEST");
        for bar in full.iter() {
            series.push(*bar);
            assert_ne!(strategy.on_bar(&series, true), Some(Side::Buy));
        }
    }
}
