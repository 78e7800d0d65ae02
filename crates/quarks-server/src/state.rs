//! Shared application state.

use crate::settings::Settings;
use quarks_core::traits::DataSource;
use quarks_strategies::StrategyRegistry;
use std::sync::Arc;

/// State shared by all request handlers.
pub struct AppState {
    /// Historical data source
    pub data: Arc<dyn DataSource>,
    /// Strategy registry
    pub registry: StrategyRegistry,
    /// Server settings
    pub settings: Settings,
}

impl AppState {
    /// Create application state over a data source.
    pub fn new(data: Arc<dyn DataSource>, settings: Settings) -> Self {
        Self {
            data,
            registry: StrategyRegistry::new(),
            settings,
        }
    }
}
