//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quarks")]
#[command(author, version, about = "Backtesting service for single-asset trading strategies")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API
    Serve(ServeArgs),
    /// Run a backtest against a CSV file
    Backtest(BacktestArgs),
    /// List available strategies
    Strategies,
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Override the bind address
    #[arg(long)]
    pub host: Option<String>,

    /// Override the bind port
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(clap::Args)]
pub struct BacktestArgs {
    /// Strategy id to backtest
    #[arg(short, long, default_value = "sma-crossover")]
    pub strategy: String,

    /// Symbol label for the run
    #[arg(short = 'S', long, default_value = "DATA")]
    pub symbol: String,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: String,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub end: String,

    /// Initial cash
    #[arg(long, default_value = "100000")]
    pub cash: f64,

    /// Commission rate on traded value
    #[arg(long, default_value = "0.001")]
    pub commission: f64,

    /// Data file (CSV)
    #[arg(long)]
    pub data: PathBuf,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub output: String,

    /// Save results to file
    #[arg(long)]
    pub save: Option<PathBuf>,
}
