//! CSV data source for offline runs and tests.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use quarks_core::error::DataError;
use quarks_core::traits::DataSource;
use quarks_core::types::Bar;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CSV record format.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "date", alias = "timestamp", alias = "Timestamp")]
    date: String,
    #[serde(alias = "Open", alias = "open")]
    open: f64,
    #[serde(alias = "High", alias = "high")]
    high: f64,
    #[serde(alias = "Low", alias = "low")]
    low: f64,
    #[serde(alias = "Close", alias = "close", alias = "Adj Close")]
    close: f64,
    #[serde(alias = "Volume", alias = "volume", default)]
    volume: f64,
}

/// CSV file data source.
pub struct CsvDataSource {
    path: PathBuf,
}

impl CsvDataSource {
    /// Create a new CSV data source.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(DataError::NoData {
                symbol: path.display().to_string(),
            });
        }
        Ok(Self { path })
    }

    fn load_from_path(path: &Path) -> Result<Vec<Bar>, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(|e| DataError::Parse(e.to_string()))?;

        let mut bars = Vec::new();

        for result in reader.deserialize() {
            let record: CsvRecord = result.map_err(|e| DataError::Parse(e.to_string()))?;
            let timestamp = Self::parse_timestamp(&record.date)?;

            bars.push(Bar::new(
                timestamp,
                record.open,
                record.high,
                record.low,
                record.close,
                record.volume,
            ));
        }

        bars.sort_by_key(|b| b.timestamp);
        Ok(bars)
    }

    /// Parse the date formats seen in exported price files.
    fn parse_timestamp(date_str: &str) -> Result<i64, DataError> {
        let formats = ["%Y-%m-%d", "%Y-%m-%d %H:%M:%S", "%Y/%m/%d", "%m/%d/%Y"];

        for format in formats {
            if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
                return Ok(dt.and_utc().timestamp_millis());
            }
            if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
                let dt = d.and_hms_opt(0, 0, 0).expect("midnight is valid");
                return Ok(dt.and_utc().timestamp_millis());
            }
        }

        // Fall back to a raw Unix timestamp; more than 10 digits means ms
        if let Ok(ts) = date_str.parse::<i64>() {
            if ts > 10_000_000_000 {
                return Ok(ts);
            }
            return Ok(ts * 1000);
        }

        Err(DataError::Parse(format!(
            "Could not parse date: {}",
            date_str
        )))
    }
}

#[async_trait]
impl DataSource for CsvDataSource {
    async fn daily_bars(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Bar>, DataError> {
        if end <= start {
            return Err(DataError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        let bars: Vec<Bar> = Self::load_from_path(&self.path)?
            .into_iter()
            .filter(|b| {
                let date = b.date();
                date >= start && date < end
            })
            .collect();

        if bars.is_empty() {
            return Err(DataError::NoData {
                symbol: symbol.to_string(),
            });
        }

        Ok(bars)
    }

    fn name(&self) -> &str {
        "CSV"
    }
}
