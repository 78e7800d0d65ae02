//! Strategy registry keyed by the API's strategy ids.

use crate::{
    BollingerConfig, BollingerStrategy, BuyHoldStrategy, CustomConfig, CustomStrategy,
    MaCrossoverConfig, MaCrossoverStrategy, MacdConfig, MacdStrategy, MeanReversionConfig,
    MeanReversionStrategy, MomentumConfig, MomentumStrategy, RsiConfig, RsiStrategy,
    StochasticConfig, StochasticStrategy, TripleSmaConfig, TripleSmaStrategy,
};
use quarks_core::{error::StrategyError, traits::Strategy, traits::StrategyConfig};
use serde::{Deserialize, Serialize};

/// Information about a registered strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyInfo {
    /// Registry id
    pub id: String,
    /// Display name
    pub name: String,
    /// Strategy description
    pub description: String,
    /// Default configuration as JSON
    pub default_config: serde_json::Value,
}

/// Registry of the available trading strategies.
pub struct StrategyRegistry {
    strategies: Vec<StrategyInfo>,
}

/// All registry ids, in listing order.
const STRATEGY_IDS: &[&str] = &[
    "sma-crossover",
    "ema-crossover",
    "rsi",
    "macd",
    "bollinger",
    "stochastic",
    "momentum",
    "triple-sma",
    "mean-reversion",
    "buy-hold",
    "custom",
];

impl StrategyRegistry {
    /// Create a registry with all built-in strategies.
    pub fn new() -> Self {
        let strategies = STRATEGY_IDS
            .iter()
            .map(|id| Self::info(id).expect("built-in strategy id"))
            .collect();
        Self { strategies }
    }

    fn info(id: &str) -> Option<StrategyInfo> {
        let (name, description, default_config) = match id {
            "sma-crossover" => (
                "SMA Crossover",
                "Buys on fast/slow SMA cross up, sells on cross down",
                serde_json::to_value(MaCrossoverConfig::default()).unwrap(),
            ),
            "ema-crossover" => (
                "EMA Crossover",
                "Buys on fast/slow EMA cross up, sells on cross down",
                serde_json::to_value(MaCrossoverConfig::ema_default()).unwrap(),
            ),
            "rsi" => (
                "RSI",
                "Buys oversold RSI levels, sells overbought levels",
                serde_json::to_value(RsiConfig::default()).unwrap(),
            ),
            "macd" => (
                "MACD",
                "Buys when the MACD line is above its signal line, sells below",
                serde_json::to_value(MacdConfig::default()).unwrap(),
            ),
            "bollinger" => (
                "Bollinger Bands",
                "Buys below the lower band, sells above the upper band",
                serde_json::to_value(BollingerConfig::default()).unwrap(),
            ),
            "stochastic" => (
                "Stochastic",
                "Buys oversold %K levels, sells overbought levels",
                serde_json::to_value(StochasticConfig::default()).unwrap(),
            ),
            "momentum" => (
                "Momentum",
                "Buys positive momentum, sells when momentum turns negative",
                serde_json::to_value(MomentumConfig::default()).unwrap(),
            ),
            "triple-sma" => (
                "Triple SMA",
                "Buys when short > medium > long SMA, sells when short < medium",
                serde_json::to_value(TripleSmaConfig::default()).unwrap(),
            ),
            "mean-reversion" => (
                "Mean Reversion",
                "Buys deep negative z-scores of price vs its rolling mean",
                serde_json::to_value(MeanReversionConfig::default()).unwrap(),
            ),
            "buy-hold" => (
                "Buy & Hold",
                "Buys once and holds for the whole period",
                serde_json::json!({}),
            ),
            "custom" => (
                "Custom",
                "Caller-configured indicator rule",
                serde_json::to_value(CustomConfig::default()).unwrap(),
            ),
            _ => return None,
        };

        Some(StrategyInfo {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            default_config,
        })
    }

    /// List all available strategies in registration order.
    pub fn list(&self) -> &[StrategyInfo] {
        &self.strategies
    }

    /// Get strategy info by id.
    pub fn get(&self, id: &str) -> Option<&StrategyInfo> {
        self.strategies.iter().find(|s| s.id == id)
    }

    /// Check if a strategy id exists.
    pub fn exists(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Create a strategy instance from a configuration value.
    pub fn create(
        &self,
        id: &str,
        config: serde_json::Value,
    ) -> Result<Box<dyn Strategy>, StrategyError> {
        fn parse<C: serde::de::DeserializeOwned + StrategyConfig>(
            config: serde_json::Value,
        ) -> Result<C, StrategyError> {
            let config: C = serde_json::from_value(config)
                .map_err(|e| StrategyError::InvalidConfig(e.to_string()))?;
            config.validate()?;
            Ok(config)
        }

        match id {
            "sma-crossover" | "ema-crossover" => Ok(Box::new(MaCrossoverStrategy::new(parse::<
                MaCrossoverConfig,
            >(
                config
            )?))),
            "rsi" => Ok(Box::new(RsiStrategy::new(parse::<RsiConfig>(config)?))),
            "macd" => Ok(Box::new(MacdStrategy::new(parse::<MacdConfig>(config)?))),
            "bollinger" => Ok(Box::new(BollingerStrategy::new(parse::<BollingerConfig>(
                config,
            )?))),
            "stochastic" => Ok(Box::new(StochasticStrategy::new(
                parse::<StochasticConfig>(config)?,
            ))),
            "momentum" => Ok(Box::new(MomentumStrategy::new(parse::<MomentumConfig>(
                config,
            )?))),
            "triple-sma" => Ok(Box::new(TripleSmaStrategy::new(parse::<TripleSmaConfig>(
                config,
            )?))),
            "mean-reversion" => Ok(Box::new(MeanReversionStrategy::new(
                parse::<MeanReversionConfig>(config)?,
            ))),
            "buy-hold" => Ok(Box::new(BuyHoldStrategy::new())),
            "custom" => Ok(Box::new(CustomStrategy::new(parse::<CustomConfig>(
                config,
            )?))),
            _ => Err(StrategyError::NotFound(id.to_string())),
        }
    }

    /// Create a strategy with its default configuration.
    pub fn create_default(&self, id: &str) -> Result<Box<dyn Strategy>, StrategyError> {
        let info = self
            .get(id)
            .ok_or_else(|| StrategyError::NotFound(id.to_string()))?;
        self.create(id, info.default_config.clone())
    }

    /// Create a strategy with caller overrides merged onto its defaults.
    pub fn create_with_overrides(
        &self,
        id: &str,
        overrides: &serde_json::Value,
    ) -> Result<Box<dyn Strategy>, StrategyError> {
        let info = self
            .get(id)
            .ok_or_else(|| StrategyError::NotFound(id.to_string()))?;

        let mut config = info.default_config.clone();
        if let (Some(base), Some(user)) = (config.as_object_mut(), overrides.as_object()) {
            for (key, value) in user {
                base.insert(key.clone(), value.clone());
            }
        }
        tracing::debug!(strategy = id, ?config, "resolved strategy config");

        self.create(id, config)
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lists_all_ids() {
        let registry = StrategyRegistry::new();
        assert_eq!(registry.list().len(), 11);

        for id in STRATEGY_IDS {
            assert!(registry.exists(id), "missing {id}");
        }
        assert!(!registry.exists("martingale"));
    }

    #[test]
    fn test_create_default_for_every_id() {
        let registry = StrategyRegistry::new();
        for info in registry.list() {
            let strategy = registry.create_default(&info.id);
            assert!(strategy.is_ok(), "failed to create {}", info.id);
        }
    }

    #[test]
    fn test_create_unknown_strategy() {
        let registry = StrategyRegistry::new();
        assert!(matches!(
            registry.create_default("unknown"),
            Err(StrategyError::NotFound(_))
        ));
    }

    #[test]
    fn test_custom_overrides_merge() {
        let registry = StrategyRegistry::new();

        let overrides = serde_json::json!({
            "indicator": "RSI",
            "period1": 7,
        });
        let strategy = registry.create_with_overrides("custom", &overrides).unwrap();
        assert_eq!(strategy.name(), "Custom");
        // period1 = 7 -> RSI needs 8 bars
        assert_eq!(strategy.warmup_period(), 8);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let registry = StrategyRegistry::new();

        let overrides = serde_json::json!({ "period1": 0 });
        assert!(registry.create_with_overrides("custom", &overrides).is_err());
    }
}
