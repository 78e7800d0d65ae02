//! Trading strategy rules.
//!
//! Each strategy wires one or more technical indicators to a buy/sell
//! decision over a single asset. Entries fire only when flat, exits only
//! when holding. The registry maps the API's strategy ids to instances.

mod bollinger;
mod buy_hold;
mod custom;
mod ma_crossover;
mod macd_strategy;
mod mean_reversion;
mod momentum_strategy;
mod registry;
mod rsi_strategy;
mod stochastic_strategy;
mod triple_sma;

pub use bollinger::{BollingerConfig, BollingerStrategy};
pub use buy_hold::BuyHoldStrategy;
pub use custom::{CustomConfig, CustomIndicator, CustomStrategy};
pub use ma_crossover::{MaCrossoverConfig, MaCrossoverStrategy};
pub use macd_strategy::{MacdConfig, MacdStrategy};
pub use mean_reversion::{MeanReversionConfig, MeanReversionStrategy};
pub use momentum_strategy::{MomentumConfig, MomentumStrategy};
pub use registry::{StrategyInfo, StrategyRegistry};
pub use rsi_strategy::{RsiConfig, RsiStrategy};
pub use stochastic_strategy::{StochasticConfig, StochasticStrategy};
pub use triple_sma::{TripleSmaConfig, TripleSmaStrategy};

#[cfg(test)]
pub(crate) mod test_util {
    use quarks_core::types::{Bar, BarSeries};

    /// Build a daily series from close prices, one bar per day.
    pub fn series_from_closes(prices: &[f64]) -> BarSeries {
        let mut series = BarSeries::new("TEST");
        for (i, &price) in prices.iter().enumerate() {
            series.push(Bar::new(
                i as i64 * 86_400_000,
                price,
                price + 1.0,
                price - 1.0,
                price,
                1000.0,
            ));
        }
        series
    }

    /// Drive a strategy over the prices bar by bar, tracking position
    /// state the way the engine does, and collect the emitted signals.
    pub fn collect_signals(
        strategy: &mut dyn quarks_core::traits::Strategy,
        prices: &[f64],
    ) -> Vec<(usize, quarks_core::types::Side)> {
        use quarks_core::types::Side;

        let full = series_from_closes(prices);
        let mut series = BarSeries::new("TEST");
        let mut in_position = false;
        let mut signals = Vec::new();

        for (i, bar) in full.iter().enumerate() {
            series.push(*bar);
            if let Some(side) = strategy.on_bar(&series, in_position) {
                in_position = side == Side::Buy;
                signals.push((i, side));
            }
        }
        signals
    }
}
