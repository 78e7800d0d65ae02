//! Position sizing algorithms.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Position sizing method.
///
/// Tags match the API's `position_sizing` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "kebab-case")]
pub enum PositionSizing {
    /// Spend a percentage of available cash
    Percent { percent: Decimal },
    /// Spend all available cash
    AllIn,
    /// Spend a fixed dollar amount (capped by available cash)
    FixedAmount { amount: Decimal },
    /// Buy a fixed number of shares, or nothing if unaffordable
    FixedShares { shares: Decimal },
}

impl Default for PositionSizing {
    fn default() -> Self {
        PositionSizing::Percent { percent: dec!(95) }
    }
}

impl PositionSizing {
    /// Build a sizing rule from the API's `position_sizing` id and its
    /// numeric `position_value` parameter.
    pub fn from_request(method: &str, value: Decimal) -> Option<Self> {
        match method {
            "percent" => Some(PositionSizing::Percent { percent: value }),
            "all-in" => Some(PositionSizing::AllIn),
            "fixed-amount" => Some(PositionSizing::FixedAmount { amount: value }),
            "fixed-shares" => Some(PositionSizing::FixedShares {
                shares: value.floor(),
            }),
            _ => None,
        }
    }

    /// Calculate the number of whole shares to buy.
    ///
    /// Returns zero when nothing is affordable or the price is not positive.
    pub fn shares_for(&self, cash: Decimal, price: Decimal) -> Decimal {
        if price <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let shares = match self {
            PositionSizing::Percent { percent } => {
                (cash * (*percent / dec!(100)) / price).floor()
            }
            PositionSizing::AllIn => (cash / price).floor(),
            PositionSizing::FixedAmount { amount } => ((*amount).min(cash) / price).floor(),
            PositionSizing::FixedShares { shares } => {
                if *shares * price <= cash {
                    *shares
                } else {
                    Decimal::ZERO
                }
            }
        };

        shares.max(Decimal::ZERO)
    }
}
