//! Backtest report generation.

use serde::{Deserialize, Serialize};

use crate::{BacktestConfig, BacktestStats};

/// Complete backtest report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestReport {
    /// Configuration used
    pub config: BacktestConfig,
    /// Statistics, trade log, and equity curve
    pub stats: BacktestStats,
}

impl BacktestReport {
    /// Generate a text summary.
    pub fn summary(&self) -> String {
        let mut s = String::new();

        s.push_str("═══════════════════════════════════════════\n");
        s.push_str("              BACKTEST REPORT               \n");
        s.push_str("═══════════════════════════════════════════\n\n");

        s.push_str("PERFORMANCE\n");
        s.push_str("───────────────────────────────────────────\n");
        s.push_str(&format!(
            "  Initial Cash:        ${:.2}\n",
            self.stats.initial_cash
        ));
        s.push_str(&format!(
            "  Final Equity:        ${:.2}\n",
            self.stats.final_equity
        ));
        s.push_str(&format!(
            "  Total Return:        {:.2}%\n",
            self.stats.total_return_pct
        ));
        s.push_str(&format!(
            "  Max Drawdown:        {:.2}%\n",
            self.stats.max_drawdown_pct
        ));
        s.push_str(&format!(
            "  Sharpe Ratio:        {:.2}\n",
            self.stats.sharpe_ratio
        ));
        s.push('\n');

        s.push_str("TRADE STATISTICS\n");
        s.push_str("───────────────────────────────────────────\n");
        s.push_str(&format!(
            "  Closed Trades:       {}\n",
            self.stats.total_trades
        ));
        s.push_str(&format!(
            "  Winning Trades:      {}\n",
            self.stats.winning_trades
        ));
        s.push_str(&format!(
            "  Losing Trades:       {}\n",
            self.stats.losing_trades
        ));
        s.push_str(&format!(
            "  Win Rate:            {:.2}%\n",
            self.stats.win_rate_pct
        ));
        s.push_str(&format!(
            "  Avg Trade P&L:       ${:.2}\n",
            self.stats.avg_trade
        ));
        s.push('\n');

        s.push_str(&format!(
            "  Bars Processed:      {}\n",
            self.stats.bars_processed
        ));
        s.push_str("═══════════════════════════════════════════\n");

        s
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
