//! Launchboard Web Server
//!
//! Run with: cargo run -p launchboard-web

use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use launchboard_web::config::Config;
use launchboard_web::router::build_router;
use launchboard_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Launchboard Web Server...");

    let config = Config::load()?;

    // Dataset load failure is fatal: the dashboard cannot start over bad data
    let state = AppState::new(config.clone())?;
    info!(
        "Dataset ready: {} launch records across {} sites",
        state.dataset.len(),
        state.dataset.sites().len()
    );

    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid server address: {}", e))?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
