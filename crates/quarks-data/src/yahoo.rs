//! Yahoo Finance daily-bar download.

use async_trait::async_trait;
use chrono::NaiveDate;
use quarks_core::error::DataError;
use quarks_core::traits::DataSource;
use quarks_core::types::Bar;
use serde::Deserialize;
use tracing::debug;

const CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize)]
struct ChartQuote {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<u64>>,
}

/// Data source backed by the Yahoo Finance chart endpoint.
pub struct YahooDataSource {
    client: reqwest::Client,
}

impl YahooDataSource {
    /// Create a new Yahoo Finance data source.
    pub fn new() -> Result<Self, DataError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| DataError::Request(e.to_string()))?;
        Ok(Self { client })
    }

    fn parse_bars(symbol: &str, data: ChartResponse) -> Result<Vec<Bar>, DataError> {
        if let Some(error) = data.chart.error {
            return Err(DataError::Request(format!(
                "{}: {}",
                error.code, error.description
            )));
        }

        let results = data.chart.result.ok_or_else(|| DataError::NoData {
            symbol: symbol.to_string(),
        })?;
        let chart = results.first().ok_or_else(|| DataError::NoData {
            symbol: symbol.to_string(),
        })?;
        let timestamps = chart.timestamp.as_ref().ok_or_else(|| DataError::NoData {
            symbol: symbol.to_string(),
        })?;
        let quote = chart
            .indicators
            .quote
            .first()
            .ok_or_else(|| DataError::NoData {
                symbol: symbol.to_string(),
            })?;

        let mut bars = Vec::with_capacity(timestamps.len());

        for (i, &ts) in timestamps.iter().enumerate() {
            // Rows with missing prices (halts, holidays) are skipped
            let (open, high, low, close) = match (
                quote.open.get(i).copied().flatten(),
                quote.high.get(i).copied().flatten(),
                quote.low.get(i).copied().flatten(),
                quote.close.get(i).copied().flatten(),
            ) {
                (Some(o), Some(h), Some(l), Some(c)) => (o, h, l, c),
                _ => continue,
            };
            let volume = quote.volume.get(i).copied().flatten().unwrap_or(0) as f64;

            bars.push(Bar::new(ts * 1000, open, high, low, close, volume));
        }

        bars.sort_by_key(|b| b.timestamp);

        if bars.is_empty() {
            return Err(DataError::NoData {
                symbol: symbol.to_string(),
            });
        }

        Ok(bars)
    }
}

#[async_trait]
impl DataSource for YahooDataSource {
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

        let start_ts = start
            .and_hms_opt(0, 0, 0)
            .expect("midnight is valid")
            .and_utc()
            .timestamp();
        let end_ts = end
            .and_hms_opt(0, 0, 0)
            .expect("midnight is valid")
            .and_utc()
            .timestamp();

        let url = format!(
            "{}/{}?period1={}&period2={}&interval=1d",
            CHART_URL, symbol, start_ts, end_ts
        );
        debug!(%symbol, %url, "downloading daily bars");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DataError::Request(e.to_string()))?;

        if !response.status().is_success() {
            if response.status() == reqwest::StatusCode::NOT_FOUND {
                return Err(DataError::NoData {
                    symbol: symbol.to_string(),
                });
            }
            return Err(DataError::Request(format!(
                "Yahoo Finance returned {}",
                response.status()
            )));
        }

        let data: ChartResponse = response
            .json()
            .await
            .map_err(|e| DataError::Parse(e.to_string()))?;

        Self::parse_bars(symbol, data)
    }

    fn name(&self) -> &str {
        "Yahoo Finance"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: serde_json::Value) -> ChartResponse {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_parse_bars_skips_null_rows() {
        let data = payload(serde_json::json!({
            "chart": {
                "result": [{
                    "timestamp": [1577923200, 1578009600, 1578096000],
                    "indicators": {
                        "quote": [{
                            "open":   [100.0, null, 102.0],
                            "high":   [101.0, 102.0, 103.0],
                            "low":    [99.0, 100.0, 101.0],
                            "close":  [100.5, 101.5, 102.5],
                            "volume": [1000, 2000, null]
                        }]
                    }
                }],
                "error": null
            }
        }));

        let bars = YahooDataSource::parse_bars("AAPL", data).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].timestamp, 1577923200000);
        assert_eq!(bars[1].close, 102.5);
        assert_eq!(bars[1].volume, 0.0); // null volume becomes zero
    }

    #[test]
    fn test_parse_bars_error_payload() {
        let data = payload(serde_json::json!({
            "chart": {
                "result": null,
                "error": { "code": "Not Found", "description": "No data found" }
            }
        }));

        assert!(matches!(
            YahooDataSource::parse_bars("NOPE", data),
            Err(DataError::Request(_))
        ));
    }

    #[test]
    fn test_parse_bars_empty_is_no_data() {
        let data = payload(serde_json::json!({
            "chart": {
                "result": [{
                    "timestamp": [],
                    "indicators": { "quote": [{
                        "open": [], "high": [], "low": [], "close": [], "volume": []
                    }] }
                }],
                "error": null
            }
        }));

        assert!(matches!(
            YahooDataSource::parse_bars("AAPL", data),
            Err(DataError::NoData { .. })
        ));
    }

    #[tokio::test]
    async fn test_invalid_range_rejected() {
        let source = YahooDataSource::new().unwrap();
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();

        assert!(matches!(
            source.daily_bars("AAPL", start, end).await,
            Err(DataError::InvalidRange { .. })
        ));
    }
}
