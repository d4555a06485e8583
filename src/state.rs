use specter_engine::ScanEngine;

use crate::config::GatewayConfig;

/// Application state shared across handlers. Immutable after startup.
pub struct AppState {
    pub config: GatewayConfig,
    pub engine: ScanEngine,
}

impl AppState {
    pub fn new(config: GatewayConfig, engine: ScanEngine) -> Self {
        Self { config, engine }
    }
}
