//! Backtest statistics.

use chrono::NaiveDate;
use quarks_core::types::{Side, TradeRecord};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Backtest statistics accumulated bar by bar and finalized once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestStats {
    /// Starting cash
    pub initial_cash: Decimal,
    /// Final equity
    pub final_equity: Decimal,
    /// Absolute return
    pub total_return: Decimal,
    /// Total return percentage
    pub total_return_pct: Decimal,
    /// Maximum drawdown percentage
    pub max_drawdown_pct: Decimal,
    /// Annualized Sharpe ratio of daily equity returns
    pub sharpe_ratio: f64,
    /// Closed round-trip trades
    pub total_trades: usize,
    /// Winning round trips
    pub winning_trades: usize,
    /// Losing round trips
    pub losing_trades: usize,
    /// Win rate percentage
    pub win_rate_pct: Decimal,
    /// Average net P&L per closed round trip
    pub avg_trade: Decimal,
    /// Number of bars processed
    pub bars_processed: usize,
    /// Equity per bar
    pub equity_curve: Vec<(NaiveDate, Decimal)>,
    /// All fills
    pub trades: Vec<TradeRecord>,
    /// Peak equity (for drawdown)
    peak_equity: Decimal,
    /// Daily returns for the Sharpe calculation
    daily_returns: Vec<f64>,
    /// Annual risk-free rate
    risk_free_rate: f64,
}

impl BacktestStats {
    /// Create a new stats tracker.
    pub fn new(initial_cash: Decimal, risk_free_rate: f64) -> Self {
        Self {
            initial_cash,
            final_equity: initial_cash,
            total_return: Decimal::ZERO,
            total_return_pct: Decimal::ZERO,
            max_drawdown_pct: Decimal::ZERO,
            sharpe_ratio: 0.0,
            total_trades: 0,
            winning_trades: 0,
            losing_trades: 0,
            win_rate_pct: Decimal::ZERO,
            avg_trade: Decimal::ZERO,
            bars_processed: 0,
            equity_curve: Vec::new(),
            trades: Vec::new(),
            peak_equity: initial_cash,
            daily_returns: Vec::new(),
            risk_free_rate,
        }
    }

    /// Record equity at a bar date.
    pub fn record_equity(&mut self, date: NaiveDate, equity: Decimal) {
        if let Some((_, prev_equity)) = self.equity_curve.last() {
            if *prev_equity > Decimal::ZERO {
                let ret = ((equity - *prev_equity) / *prev_equity)
                    .to_string()
                    .parse::<f64>()
                    .unwrap_or(0.0);
                self.daily_returns.push(ret);
            }
        }

        self.equity_curve.push((date, equity));

        if equity > self.peak_equity {
            self.peak_equity = equity;
        }

        if self.peak_equity > Decimal::ZERO {
            let drawdown = (self.peak_equity - equity) / self.peak_equity * dec!(100);
            if drawdown > self.max_drawdown_pct {
                self.max_drawdown_pct = drawdown;
            }
        }

        self.bars_processed += 1;
    }

    /// Record a fill.
    pub fn add_trade(&mut self, trade: TradeRecord) {
        self.trades.push(trade);
    }

    /// Calculate final statistics.
    pub fn finalize(&mut self) {
        if let Some((_, equity)) = self.equity_curve.last() {
            self.final_equity = *equity;
        }

        self.total_return = self.final_equity - self.initial_cash;
        if self.initial_cash > Decimal::ZERO {
            self.total_return_pct = self.total_return / self.initial_cash * dec!(100);
        }

        self.compute_round_trips();
        self.compute_sharpe();
    }

    /// Pair each full-position sell with the buys since the last flat
    /// state and net out commissions on both legs.
    fn compute_round_trips(&mut self) {
        let mut open_cost = Decimal::ZERO;
        let mut holding = false;
        let mut net_total = Decimal::ZERO;

        for trade in &self.trades {
            match trade.side {
                Side::Buy => {
                    open_cost += trade.value + trade.commission;
                    holding = true;
                }
                Side::Sell => {
                    if holding {
                        let proceeds = trade.value - trade.commission;
                        let pnl = proceeds - open_cost;

                        self.total_trades += 1;
                        net_total += pnl;
                        if pnl > Decimal::ZERO {
                            self.winning_trades += 1;
                        } else if pnl < Decimal::ZERO {
                            self.losing_trades += 1;
                        }

                        open_cost = Decimal::ZERO;
                        holding = false;
                    }
                }
            }
        }

        if self.total_trades > 0 {
            self.win_rate_pct =
                Decimal::from(self.winning_trades * 100) / Decimal::from(self.total_trades);
            self.avg_trade = net_total / Decimal::from(self.total_trades);
        }
    }

    fn compute_sharpe(&mut self) {
        if self.daily_returns.is_empty() {
            return;
        }

        let n = self.daily_returns.len() as f64;
        let mean: f64 = self.daily_returns.iter().sum::<f64>() / n;
        let variance: f64 = self
            .daily_returns
            .iter()
            .map(|r| (r - mean).powi(2))
            .sum::<f64>()
            / n;
        let std_dev = variance.sqrt();

        if std_dev > 0.0 {
            let daily_rf = self.risk_free_rate / TRADING_DAYS_PER_YEAR;
            self.sharpe_ratio = (mean - daily_rf) / std_dev * TRADING_DAYS_PER_YEAR.sqrt();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 1, day).unwrap()
    }

    fn fill(day: u32, side: Side, price: Decimal, size: Decimal) -> TradeRecord {
        let value = price * size;
        TradeRecord {
            date: date(day),
            side,
            price,
            size,
            value,
            commission: value * dec!(0.001),
        }
    }

    #[test]
    fn test_drawdown_tracks_peak() {
        let mut stats = BacktestStats::new(dec!(100000), 0.0);
        stats.record_equity(date(1), dec!(100000));
        stats.record_equity(date(2), dec!(110000));
        stats.record_equity(date(3), dec!(99000));
        stats.finalize();

        // (110000 - 99000) / 110000 = 10%
        assert_eq!(stats.max_drawdown_pct, dec!(10));
        assert_eq!(stats.final_equity, dec!(99000));
        assert_eq!(stats.total_return, dec!(-1000));
    }

    #[test]
    fn test_round_trip_pnl_nets_commissions() {
        let mut stats = BacktestStats::new(dec!(100000), 0.0);
        stats.add_trade(fill(1, Side::Buy, dec!(100), dec!(100)));
        stats.add_trade(fill(5, Side::Sell, dec!(110), dec!(100)));
        stats.record_equity(date(1), dec!(100000));
        stats.finalize();

        assert_eq!(stats.total_trades, 1);
        assert_eq!(stats.winning_trades, 1);
        assert_eq!(stats.losing_trades, 0);
        assert_eq!(stats.win_rate_pct, dec!(100));
        // 11000 - 11 - (10000 + 10) = 979
        assert_eq!(stats.avg_trade, dec!(979));
    }

    #[test]
    fn test_open_position_not_counted_as_trade() {
        let mut stats = BacktestStats::new(dec!(100000), 0.0);
        stats.add_trade(fill(1, Side::Buy, dec!(100), dec!(100)));
        stats.record_equity(date(1), dec!(100000));
        stats.finalize();

        assert_eq!(stats.total_trades, 0);
        assert_eq!(stats.win_rate_pct, Decimal::ZERO);
    }

    #[test]
    fn test_sharpe_positive_for_steady_gains() {
        let mut stats = BacktestStats::new(dec!(100000), 0.0);
        let mut equity = dec!(100000);
        for day in 1..=20 {
            equity += dec!(100);
            stats.record_equity(date(day), equity);
        }
        stats.finalize();

        assert!(stats.sharpe_ratio > 0.0);
    }

    #[test]
    fn test_sharpe_zero_without_variance() {
        let mut stats = BacktestStats::new(dec!(100000), 0.01);
        for day in 1..=10 {
            stats.record_equity(date(day), dec!(100000));
        }
        stats.finalize();

        assert_eq!(stats.sharpe_ratio, 0.0);
    }
}
