//! Server configuration

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind the API server to
    pub host: String,
    /// Port to bind the API server to (0 picks an ephemeral port)
    pub port: u16,
    /// Path to the CSV price dataset
    pub dataset_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8787,
            dataset_path: PathBuf::from("data/StockPrices.csv"),
        }
    }
}

impl ServerConfig {
    /// Build a config from the environment, falling back to defaults.
    ///
    /// Recognized variables: `STOCKDASH_HOST`, `STOCKDASH_PORT`,
    /// `STOCKDASH_DATA`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = env::var("STOCKDASH_HOST") {
            if !host.is_empty() {
                config.host = host;
            }
        }
        if let Ok(port) = env::var("STOCKDASH_PORT") {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(_) => tracing::warn!("Ignoring unparseable STOCKDASH_PORT: {}", port),
            }
        }
        if let Ok(path) = env::var("STOCKDASH_DATA") {
            if !path.is_empty() {
                config.dataset_path = PathBuf::from(path);
            }
        }

        config
    }
}
