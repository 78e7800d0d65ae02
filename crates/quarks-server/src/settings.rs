//! Server settings.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Annual risk-free rate for the Sharpe ratio
    pub risk_free_rate: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            risk_free_rate: 0.01,
        }
    }
}

impl Settings {
    /// Load settings from an optional TOML file plus `QUARKS__` prefixed
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", defaults.port as i64)?
            .set_default("risk_free_rate", defaults.risk_free_rate)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix("QUARKS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.port, 5000);
        assert_eq!(settings.host, "0.0.0.0");
        assert!((settings.risk_free_rate - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_missing_file_rejected() {
        assert!(Settings::load(Some(Path::new("/nonexistent/quarks.toml"))).is_err());
    }
}
