//! User-configured strategy builder.
//!
//! Lets the caller pick an indicator and two periods. `SMA` and `EMA`
//! trade the period1/period2 crossover; `RSI` uses period1 as the RSI
//! lookback and period2 as the buy threshold, selling above 70.

use quarks_core::{
    error::StrategyError,
    traits::{Indicator, Strategy, StrategyConfig},
    types::{BarSeries, Side},
};
use quarks_indicators::{Ema, Rsi, Sma};
use serde::{Deserialize, Serialize};

/// Indicator choices for the custom strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CustomIndicator {
    Sma,
    Ema,
    Rsi,
}

/// RSI exit level for the custom strategy.
const RSI_EXIT_LEVEL: f64 = 70.0;

/// Configuration for the custom strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomConfig {
    /// Indicator to build the rule from
    pub indicator: CustomIndicator,
    /// Fast period (or RSI lookback)
    pub period1: usize,
    /// Slow period (or RSI buy threshold)
    pub period2: usize,
}

impl Default for CustomConfig {
    fn default() -> Self {
        Self {
            indicator: CustomIndicator::Sma,
            period1: 10,
            period2: 30,
        }
    }
}

impl StrategyConfig for CustomConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        if self.period1 == 0 || self.period2 == 0 {
            return Err(StrategyError::InvalidConfig(
                "Periods must be greater than 0".into(),
            ));
        }
        // For the MA variants period2 is the slow period
        if matches!(self.indicator, CustomIndicator::Sma | CustomIndicator::Ema)
            && self.period1 >= self.period2
        {
            return Err(StrategyError::InvalidConfig(
                "period1 must be less than period2 for moving averages".into(),
            ));
        }
        Ok(())
    }
}

/// User-configured strategy.
pub struct CustomStrategy {
    config: CustomConfig,
    prev_fast: Option<f64>,
    prev_slow: Option<f64>,
}

impl CustomStrategy {
    /// Create a new custom strategy.
    pub fn new(config: CustomConfig) -> Self {
        Self {
            config,
            prev_fast: None,
            prev_slow: None,
        }
    }

    fn crossover_signal(
        &mut self,
        closes: &[f64],
        in_position: bool,
        use_ema: bool,
    ) -> Option<Side> {
        let (fast, slow) = if use_ema {
            (
                Ema::new(self.config.period1).calculate(closes),
                Ema::new(self.config.period2).calculate(closes),
            )
        } else {
            (
                Sma::new(self.config.period1).calculate(closes),
                Sma::new(self.config.period2).calculate(closes),
            )
        };

        let current_fast = *fast.last()?;
        let current_slow = *slow.last()?;

        let signal = match (self.prev_fast, self.prev_slow) {
            (Some(prev_f), Some(prev_s)) => {
                if !in_position && prev_f <= prev_s && current_fast > current_slow {
                    Some(Side::Buy)
                } else if in_position && prev_f >= prev_s && current_fast < current_slow {
                    Some(Side::Sell)
                } else {
                    None
                }
            }
            _ => None,
        };

        self.prev_fast = Some(current_fast);
        self.prev_slow = Some(current_slow);

        signal
    }

    fn rsi_signal(&self, closes: &[f64], in_position: bool) -> Option<Side> {
        let values = Rsi::new(self.config.period1).calculate(closes);
        let current = *values.last()?;

        if !in_position && current < self.config.period2 as f64 {
            Some(Side::Buy)
        } else if in_position && current > RSI_EXIT_LEVEL {
            Some(Side::Sell)
        } else {
            None
        }
    }
}

impl Strategy for CustomStrategy {
    fn name(&self) -> &str {
        "Custom"
    }

    fn description(&self) -> &str {
        "Caller-configured indicator rule"
    }

    fn on_bar(&mut self, series: &BarSeries, in_position: bool) -> Option<Side> {
        if series.len() < self.warmup_period() {
            return None;
        }

        let closes = series.closes();
        match self.config.indicator {
            CustomIndicator::Sma => self.crossover_signal(&closes, in_position, false),
            CustomIndicator::Ema => self.crossover_signal(&closes, in_position, true),
            CustomIndicator::Rsi => self.rsi_signal(&closes, in_position),
        }
    }

    fn warmup_period(&self) -> usize {
        match self.config.indicator {
            CustomIndicator::Sma | CustomIndicator::Ema => self.config.period2 + 1,
            CustomIndicator::Rsi => self.config.period1 + 1,
        }
    }

    fn reset(&mut self) {
        self.prev_fast = None;
        self.prev_slow = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::collect_signals;

    #[test]
    fn test_indicator_serde() {
        let config: CustomConfig = serde_json::from_value(serde_json::json!({
            "indicator": "EMA",
            "period1": 5,
            "period2": 10,
        }))
        .unwrap();
        assert_eq!(config.indicator, CustomIndicator::Ema);
    }

    #[test]
    fn test_config_validation() {
        let mut config = CustomConfig::default();
        assert!(config.validate().is_ok());

        config.period1 = 30;
        config.period2 = 10;
        assert!(config.validate().is_err());

        // RSI variant does not require period1 < period2
        config.indicator = CustomIndicator::Rsi;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sma_crossover_rule() {
        let mut strategy = CustomStrategy::new(CustomConfig {
            indicator: CustomIndicator::Sma,
            period1: 3,
            period2: 5,
        });

        let prices = [
            100.0, 99.0, 98.0, 97.0, 96.0, 97.0, 99.0, 102.0, 105.0, 108.0,
        ];
        let signals = collect_signals(&mut strategy, &prices);

        assert!(signals.iter().any(|(_, s)| *s == Side::Buy));
    }

    #[test]
    fn test_rsi_rule_uses_period2_as_threshold() {
        let mut strategy = CustomStrategy::new(CustomConfig {
            indicator: CustomIndicator::Rsi,
            period1: 5,
            period2: 30,
        });

        // Steady decline pushes RSI below 30
        let prices: Vec<f64> = (0..12).map(|i| 100.0 - i as f64).collect();
        let signals = collect_signals(&mut strategy, &prices);

        assert_eq!(signals.first().map(|(_, s)| *s), Some(Side::Buy));
    }
}
