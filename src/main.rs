//! stockdash server binary

use std::sync::Arc;

use stockdash::api::ApiServer;
use stockdash::config::ServerConfig;
use stockdash::data::DatasetLoader;
use stockdash::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stockdash=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting stockdash...");

    let config = ServerConfig::from_env();
    let state = Arc::new(AppState::new(config));

    // The selection list offered to the form is whatever the dataset holds.
    match DatasetLoader::new(&state.config.dataset_path).tickers() {
        Ok(tickers) => {
            tracing::info!("Dataset offers {} tickers: {}", tickers.len(), tickers.join(", "))
        }
        Err(e) => tracing::warn!("Dataset not readable at startup: {}", e),
    }

    let mut server = ApiServer::new(state);
    let addr = server.start().await?;
    tracing::info!("Listening on http://{}", addr);
    tracing::info!("  POST http://{}/api/stocks", addr);
    tracing::info!("  GET  http://{}/health", addr);

    tokio::signal::ctrl_c().await?;
    tracing::info!("Received ctrl-c, shutting down");
    server.stop();

    Ok(())
}
