//! Data source trait definitions.

use crate::error::DataError;
use crate::types::Bar;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for historical daily-bar sources.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch daily bars for a symbol over a date range.
    ///
    /// # Returns
    /// Bars ordered from oldest to newest; an empty range is an error.
    async fn daily_bars(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Bar>, DataError>;

    /// Get the data source name.
    fn name(&self) -> &str;
}
