//! Backtest command implementation.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use quarks_backtest::{BacktestConfig, BacktestEngine};
use quarks_core::traits::DataSource;
use quarks_data::CsvDataSource;
use quarks_strategies::StrategyRegistry;
use rust_decimal::Decimal;
use tracing::info;

use crate::cli::BacktestArgs;

pub async fn run(args: BacktestArgs) -> Result<()> {
    info!("Starting backtest for strategy: {}", args.strategy);

    let registry = StrategyRegistry::new();
    let mut strategy = registry
        .create_default(&args.strategy)
        .context("Failed to create strategy")?;

    let start = NaiveDate::parse_from_str(&args.start, "%Y-%m-%d")
        .context("Invalid start date, expected YYYY-MM-DD")?;
    let end = NaiveDate::parse_from_str(&args.end, "%Y-%m-%d")
        .context("Invalid end date, expected YYYY-MM-DD")?;

    let source = CsvDataSource::new(&args.data).context("Failed to open data file")?;
    let bars = source
        .daily_bars(&args.symbol, start, end)
        .await
        .context("Failed to load bars")?;
    info!("Loaded {} bars for {}", bars.len(), args.symbol);

    let config = BacktestConfig {
        initial_cash: Decimal::try_from(args.cash).unwrap_or_default(),
        commission_rate: Decimal::try_from(args.commission).unwrap_or_default(),
        ..Default::default()
    };
    let engine = BacktestEngine::new(config);
    let report = engine.run(strategy.as_mut(), &args.symbol, &bars)?;

    match args.output.as_str() {
        "json" => println!("{}", report.to_json()?),
        _ => println!("{}", report.summary()),
    }

    if let Some(save_path) = &args.save {
        std::fs::write(save_path, report.to_json()?)?;
        info!("Results saved to {:?}", save_path);
    }

    Ok(())
}
