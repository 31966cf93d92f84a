mod config;
mod error;
mod handlers;
mod models;
mod router;
mod state;

use config::ServerConfig;
use router::create_router;
use state::AppState;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("starting exchange gateway");

    let config = ServerConfig::from_env()?;

    // One order book per market; a single market for now
    let state = AppState::new(["ETH"]);

    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("listening on {}", config.bind_addr());
    axum::serve(listener, app).await?;

    Ok(())
}
