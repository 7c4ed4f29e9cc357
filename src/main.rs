//! Weighmark Dashboard Server
//!
//! Run with: cargo run --bin weighmark
//!
//! # Configuration
//!
//! Read from `<config dir>/weighmark/config.toml` or `./weighmark.toml` when
//! present. Environment variables override the file:
//! - `WEIGHMARK_HOST`: Host to bind to (default: 127.0.0.1)
//! - `WEIGHMARK_PORT`: Port to listen on (default: 8050)
//! - `WEIGHMARK_LOG_LEVEL`: Filter directive (default: weighmark=info,tower_http=info)
//! - `WEIGHMARK_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Takes precedence over `WEIGHMARK_LOG_LEVEL`

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use weighmark::api::{serve, ApiConfig, AppState};
use weighmark::config::{Config, LogFormat, LoggingConfig};
use weighmark::ratings::RatingStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    init_tracing(&config.logging);

    tracing::info!("Starting Weighmark dashboard v{}", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(RatingStore::fixture());
    tracing::info!(
        platforms = store.platforms().len(),
        tasks = store.task_count(),
        "Rating store loaded"
    );

    let api_config = ApiConfig::from(&config.server);
    let state = AppState::new(store, api_config.clone())?;

    serve(state, &api_config).await?;

    tracing::info!("Weighmark dashboard stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("weighmark=info"));

    let registry = tracing_subscriber::registry().with(filter);

    match logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
