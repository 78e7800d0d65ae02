//! Trade records produced by backtest runs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order side (buy or sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Get the opposite side.
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// Record of a single executed trade.
///
/// `value` is `price * size` before commission; commission is charged on
/// top of the value for buys and deducted from the proceeds for sells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Fill date
    pub date: NaiveDate,
    /// Buy or sell
    pub side: Side,
    /// Fill price
    pub price: Decimal,
    /// Number of shares
    pub size: Decimal,
    /// Traded value (price * size)
    pub value: Decimal,
    /// Commission charged
    pub commission: Decimal,
}

impl TradeRecord {
    /// Net cash flow of the trade: negative for buys, positive for sells.
    pub fn cash_flow(&self) -> Decimal {
        match self.side {
            Side::Buy => -(self.value + self.commission),
            Side::Sell => self.value - self.commission,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn trade(side: Side) -> TradeRecord {
        TradeRecord {
            date: NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
            side,
            price: dec!(100),
            size: dec!(10),
            value: dec!(1000),
            commission: dec!(1),
        }
    }

    #[test]
    fn test_side_serde() {
        assert_eq!(serde_json::to_string(&Side::Buy).unwrap(), "\"BUY\"");
        assert_eq!(serde_json::to_string(&Side::Sell).unwrap(), "\"SELL\"");
    }

    #[test]
    fn test_cash_flow() {
        assert_eq!(trade(Side::Buy).cash_flow(), dec!(-1001));
        assert_eq!(trade(Side::Sell).cash_flow(), dec!(999));
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Buy.opposite(), Side::Sell);
        assert_eq!(Side::Sell.opposite(), Side::Buy);
    }
}
