//! Application state management

use crate::config::ServerConfig;

/// Application state shared across all handlers
pub struct AppState {
    /// Server configuration, including the dataset location
    pub config: ServerConfig,
}

impl AppState {
    /// Create new application state
    pub fn new(config: ServerConfig) -> Self {
        tracing::info!("Dataset path: {:?}", config.dataset_path);
        Self { config }
    }
}
