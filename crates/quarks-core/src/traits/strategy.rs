//! Strategy trait definitions.

use crate::error::StrategyError;
use crate::types::{BarSeries, Side};

/// Configuration trait for strategies.
pub trait StrategyConfig: Send + Sync + Clone + 'static {
    /// Validate the configuration.
    fn validate(&self) -> Result<(), StrategyError>;
}

/// Core strategy trait.
///
/// A strategy is a rule over one or more indicators that decides when to
/// enter and exit a single-asset position. It is driven bar by bar and
/// told whether the backtest currently holds a position, so entry rules
/// fire only when flat and exit rules only when holding.
pub trait Strategy: Send + Sync {
    /// Get the display name of this strategy.
    fn name(&self) -> &str;

    /// Process the series up to and including the newest bar.
    ///
    /// # Arguments
    /// * `series` - All bars seen so far, oldest first
    /// * `in_position` - Whether shares are currently held
    ///
    /// # Returns
    /// * `Some(Side::Buy)` to open a position
    /// * `Some(Side::Sell)` to close it
    /// * `None` to do nothing
    fn on_bar(&mut self, series: &BarSeries, in_position: bool) -> Option<Side>;

    /// Number of bars needed before the strategy can generate signals.
    fn warmup_period(&self) -> usize;

    /// Reset any internal state before a fresh run.
    fn reset(&mut self) {}

    /// Get a description of the strategy.
    fn description(&self) -> &str {
        ""
    }
}
