//! Position sizing rules.
//!
//! A sizing rule converts available cash and the current price into a
//! whole-share order quantity for a buy. Sells always close the full
//! position, so only buys are sized here.

mod position_sizer;

pub use position_sizer::PositionSizing;
