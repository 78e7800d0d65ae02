//! Triple SMA alignment strategy.
//!
//! Buys when the short, medium, and long averages are stacked in
//! ascending order of freshness, sells when the short average drops
//! below the medium.

use quarks_core::{
    error::StrategyError,
    traits::{Indicator, Strategy, StrategyConfig},
    types::{BarSeries, Side},
};
use quarks_indicators::Sma;
use serde::{Deserialize, Serialize};

/// Configuration for the triple SMA strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripleSmaConfig {
    /// Short average period
    pub short: usize,
    /// Medium average period
    pub medium: usize,
    /// Long average period
    pub long: usize,
}

impl Default for TripleSmaConfig {
    fn default() -> Self {
        Self {
            short: 5,
            medium: 15,
            long: 30,
        }
    }
}

impl StrategyConfig for TripleSmaConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        if self.short == 0 {
            return Err(StrategyError::InvalidConfig(
                "Short period must be greater than 0".into(),
            ));
        }
        if !(self.short < self.medium && self.medium < self.long) {
            return Err(StrategyError::InvalidConfig(
                "Periods must be strictly increasing".into(),
            ));
        }
        Ok(())
    }
}

/// Triple SMA alignment strategy.
pub struct TripleSmaStrategy {
    config: TripleSmaConfig,
}

impl TripleSmaStrategy {
    /// Create a new triple SMA strategy.
    pub fn new(config: TripleSmaConfig) -> Self {
        Self { config }
    }
}

impl Strategy for TripleSmaStrategy {
    fn name(&self) -> &str {
        "Triple SMA"
    }

    fn description(&self) -> &str {
        "Buys when short > medium > long SMA, sells when short < medium"
    }

    fn on_bar(&mut self, series: &BarSeries, in_position: bool) -> Option<Side> {
        if series.len() < self.warmup_period() {
            return None;
        }

        let closes = series.closes();
        let short = *Sma::new(self.config.short).calculate(&closes).last()?;
        let medium = *Sma::new(self.config.medium).calculate(&closes).last()?;
        let long = *Sma::new(self.config.long).calculate(&closes).last()?;

        if !in_position && short > medium && medium > long {
            Some(Side::Buy)
        } else if in_position && short < medium {
            Some(Side::Sell)
        } else {
            None
        }
    }

    fn warmup_period(&self) -> usize {
        self.config.long
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::collect_signals;

    #[test]
    fn test_config_validation() {
        assert!(TripleSmaConfig::default().validate().is_ok());
        assert!(TripleSmaConfig {
            short: 15,
            medium: 5,
            long: 30,
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_stacked_averages_buy() {
        let mut strategy = TripleSmaStrategy::new(TripleSmaConfig {
            short: 2,
            medium: 4,
            long: 8,
        });

        // A steady uptrend stacks short > medium > long
        let prices: Vec<f64> = (0..12).map(|i| 100.0 + 2.0 * i as f64).collect();
        let signals = collect_signals(&mut strategy, &prices);

        assert_eq!(signals.first().map(|(_, s)| *s), Some(Side::Buy));
    }

    #[test]
    fn test_short_below_medium_sells() {
        let mut strategy = TripleSmaStrategy::new(TripleSmaConfig {
            short: 2,
            medium: 4,
            long: 8,
        });

        let mut prices: Vec<f64> = (0..12).map(|i| 100.0 + 2.0 * i as f64).collect();
        prices.extend((0..8).map(|i| 122.0 - 4.0 * i as f64));
        let signals = collect_signals(&mut strategy, &prices);

        let sides: Vec<Side> = signals.iter().map(|(_, s)| *s).collect();
        assert!(sides.windows(2).any(|w| w == [Side::Buy, Side::Sell]));
    }
}
