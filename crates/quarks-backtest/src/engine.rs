//! Backtest engine.

use quarks_core::error::BacktestError;
use quarks_core::traits::Strategy;
use quarks_core::types::{Bar, BarSeries, Side, TradeRecord};
use quarks_sizing::PositionSizing;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::report::BacktestReport;
use crate::statistics::BacktestStats;

/// Backtest configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestConfig {
    /// Starting cash
    pub initial_cash: Decimal,
    /// Commission as a fraction of traded value (0.001 = 0.1%)
    pub commission_rate: Decimal,
    /// Buy sizing rule
    pub sizing: PositionSizing,
    /// Annual risk-free rate used by the Sharpe ratio
    pub risk_free_rate: f64,
}

impl Default for BacktestConfig {
    fn default() -> Self {
        Self {
            initial_cash: dec!(100000),
            commission_rate: dec!(0.001),
            sizing: PositionSizing::default(),
            risk_free_rate: 0.01,
        }
    }
}

/// Backtest engine.
///
/// Signals raised on a bar become market orders that fill at the next
/// bar's open. A buy order is sized against available cash at the fill
/// price; a sell order closes the whole position. An order still pending
/// after the last bar is discarded.
pub struct BacktestEngine {
    config: BacktestConfig,
}

impl BacktestEngine {
    /// Create a new backtest engine.
    pub fn new(config: BacktestConfig) -> Self {
        Self { config }
    }

    /// Run a backtest over pre-sorted daily bars.
    pub fn run(
        &self,
        strategy: &mut dyn Strategy,
        symbol: &str,
        bars: &[Bar],
    ) -> Result<BacktestReport, BacktestError> {
        if bars.is_empty() {
            return Err(BacktestError::EmptySeries);
        }
        if self.config.initial_cash <= Decimal::ZERO {
            return Err(BacktestError::InvalidConfig(
                "Initial cash must be positive".into(),
            ));
        }

        strategy.reset();

        let mut stats = BacktestStats::new(self.config.initial_cash, self.config.risk_free_rate);
        let mut series = BarSeries::new(symbol);
        let mut cash = self.config.initial_cash;
        let mut shares = Decimal::ZERO;
        let mut pending: Option<Side> = None;

        for bar in bars {
            // Fill the order raised on the previous bar at this bar's open
            if let Some(side) = pending.take() {
                let price = Decimal::try_from(bar.open).unwrap_or_default();
                match side {
                    Side::Buy if shares == Decimal::ZERO => {
                        let size = self.config.sizing.shares_for(cash, price);
                        if size > Decimal::ZERO {
                            let value = size * price;
                            let commission = value * self.config.commission_rate;
                            cash -= value + commission;
                            shares += size;
                            debug!(%symbol, %size, %price, "buy filled");
                            stats.add_trade(TradeRecord {
                                date: bar.date(),
                                side: Side::Buy,
                                price,
                                size,
                                value,
                                commission,
                            });
                        }
                    }
                    Side::Sell if shares > Decimal::ZERO => {
                        let size = shares;
                        let value = size * price;
                        let commission = value * self.config.commission_rate;
                        cash += value - commission;
                        shares = Decimal::ZERO;
                        debug!(%symbol, %size, %price, "sell filled");
                        stats.add_trade(TradeRecord {
                            date: bar.date(),
                            side: Side::Sell,
                            price,
                            size,
                            value,
                            commission,
                        });
                    }
                    _ => {}
                }
            }

            series.push(*bar);
            let in_position = shares > Decimal::ZERO;

            if let Some(side) = strategy.on_bar(&series, in_position) {
                // Only accept signals consistent with the position state
                match side {
                    Side::Buy if !in_position => pending = Some(Side::Buy),
                    Side::Sell if in_position => pending = Some(Side::Sell),
                    _ => {}
                }
            }

            let close = Decimal::try_from(bar.close).unwrap_or_default();
            stats.record_equity(bar.date(), cash + shares * close);
        }

        stats.finalize();

        Ok(BacktestReport {
            config: self.config.clone(),
            stats,
        })
    }
}
