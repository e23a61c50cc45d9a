mod app;
mod config;
mod errors;
mod external;
mod logging;
mod models;
mod routes;
mod services;
mod state;
mod store;

use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::logging::{init_logging, LoggingConfig};
use crate::state::AppState;
use crate::store::FixtureStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    init_logging(LoggingConfig::from_env())?;

    let config = AppConfig::from_env()?;
    tracing::info!(
        "📊 Price provider: {:?} (placeholder share price {})",
        config.price_provider,
        config.placeholder_share_price
    );
    if let Some(seed) = config.synth_seed {
        tracing::info!("🎲 Synthetic prices seeded with {}", seed);
    }

    let addr = config.bind_addr();
    let state = AppState::new(config, FixtureStore::seeded());
    let app = app::create_app(state);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Stocknet backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
