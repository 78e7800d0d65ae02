//! Core types and traits for the quarks backtesting service.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Bar, BarSeries)
//! - Trade records and order sides
//! - Core traits for strategies, indicators, and data sources

pub mod error;
pub mod traits;
pub mod types;

pub use error::{QuarksError, QuarksResult};
pub use traits::*;
pub use types::*;
