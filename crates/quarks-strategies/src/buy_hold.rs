//! Buy-and-hold strategy.
//!
//! Buys once on the first bar and never sells.

use quarks_core::{
    traits::Strategy,
    types::{BarSeries, Side},
};

/// Buy-and-hold strategy.
#[derive(Debug, Default)]
pub struct BuyHoldStrategy {
    ordered: bool,
}

impl BuyHoldStrategy {
    /// Create a new buy-and-hold strategy.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Strategy for BuyHoldStrategy {
    fn name(&self) -> &str {
        "Buy & Hold"
    }

    fn description(&self) -> &str {
        "Buys once and holds for the whole period"
    }

    fn on_bar(&mut self, _series: &BarSeries, in_position: bool) -> Option<Side> {
        if !in_position && !self.ordered {
            self.ordered = true;
            return Some(Side::Buy);
        }
        None
    }

    fn warmup_period(&self) -> usize {
        1
    }

    fn reset(&mut self) {
        self.ordered = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::collect_signals;

    #[test]
    fn test_buys_exactly_once() {
        let mut strategy = BuyHoldStrategy::new();
        let signals = collect_signals(&mut strategy, &[100.0, 101.0, 99.0, 102.0, 98.0]);

        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0], (0, Side::Buy));
    }

    #[test]
    fn test_reset_allows_new_entry() {
        let mut strategy = BuyHoldStrategy::new();
        collect_signals(&mut strategy, &[100.0, 101.0]);

        strategy.reset();
        let signals = collect_signals(&mut strategy, &[100.0, 101.0]);
        assert_eq!(signals.len(), 1);
    }
}
