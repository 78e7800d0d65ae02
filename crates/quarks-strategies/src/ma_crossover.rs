//! Moving average crossover strategy.
//!
//! Buys when the fast average crosses above the slow average,
//! sells when it crosses back below. Covers both the SMA and EMA
//! variants through the `use_ema` flag.

use quarks_core::{
    error::StrategyError,
    traits::{Indicator, Strategy, StrategyConfig},
    types::{BarSeries, Side},
};
use quarks_indicators::{Ema, Sma};
use serde::{Deserialize, Serialize};

/// Configuration for the MA crossover strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaCrossoverConfig {
    /// Fast moving average period
    pub fast_period: usize,
    /// Slow moving average period
    pub slow_period: usize,
    /// Use EMA instead of SMA
    pub use_ema: bool,
}

impl Default for MaCrossoverConfig {
    fn default() -> Self {
        // SMA variant defaults; the EMA variant registers as 9/21.
        Self {
            fast_period: 10,
            slow_period: 30,
            use_ema: false,
        }
    }
}

impl MaCrossoverConfig {
    /// Defaults for the EMA crossover variant.
    pub fn ema_default() -> Self {
        Self {
            fast_period: 9,
            slow_period: 21,
            use_ema: true,
        }
    }
}

impl StrategyConfig for MaCrossoverConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        if self.fast_period == 0 {
            return Err(StrategyError::InvalidConfig(
                "Fast period must be greater than 0".into(),
            ));
        }
        if self.fast_period >= self.slow_period {
            return Err(StrategyError::InvalidConfig(
                "Fast period must be less than slow period".into(),
            ));
        }
        Ok(())
    }
}

/// Moving average crossover strategy.
pub struct MaCrossoverStrategy {
    config: MaCrossoverConfig,
    prev_fast: Option<f64>,
    prev_slow: Option<f64>,
}

impl MaCrossoverStrategy {
    /// Create a new MA crossover strategy.
    pub fn new(config: MaCrossoverConfig) -> Self {
        Self {
            config,
            prev_fast: None,
            prev_slow: None,
        }
    }

    fn calculate_ma(&self, closes: &[f64], period: usize) -> Vec<f64> {
        if self.config.use_ema {
            Ema::new(period).calculate(closes)
        } else {
            Sma::new(period).calculate(closes)
        }
    }
}

impl Strategy for MaCrossoverStrategy {
    fn name(&self) -> &str {
        if self.config.use_ema {
            "EMA Crossover"
        } else {
            "SMA Crossover"
        }
    }

    fn description(&self) -> &str {
        "Buys on fast/slow moving average cross up, sells on cross down"
    }

    fn on_bar(&mut self, series: &BarSeries, in_position: bool) -> Option<Side> {
        if series.len() < self.warmup_period() {
            return None;
        }

        let closes = series.closes();
        let fast = self.calculate_ma(&closes, self.config.fast_period);
        let slow = self.calculate_ma(&closes, self.config.slow_period);

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

    fn warmup_period(&self) -> usize {
        self.config.slow_period + 1
    }

    fn reset(&mut self) {
        self.prev_fast = None;
        self.prev_slow = None;
    }
}
