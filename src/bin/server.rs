//! Launch Records Dashboard HTTP Server Binary
//!
//! This is the main entry point for the dashboard REST API server.
//! It loads the launch dataset, builds the dashboard binding layer, and
//! starts serving requests. Loading is fatal: the listener never starts on
//! a missing or invalid dataset.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin lrd-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: from dashboard.toml, else 0.0.0.0)
//! - `PORT`: Server port (default: from dashboard.toml, else 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use lrd_rust::binding::Dashboard;
use lrd_rust::config::DashboardConfig;
use lrd_rust::http::{create_router, AppState};
use lrd_rust::store::DatasetStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Launch Records Dashboard server");

    let config = DashboardConfig::from_default_location()?;

    // Load the dataset exactly once; any load error aborts startup
    let store = DatasetStore::load(&config.dataset.path)?;
    info!(
        "Dataset loaded: {} records, {} launch sites",
        store.records().len(),
        store.sites().len()
    );

    // Build the dashboard with its control registry and default state
    let dashboard = Dashboard::new(Arc::new(store), config.controls.payload_ceiling);

    // Create application state
    let state = AppState::new(dashboard);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address, environment overriding the config file
    let host = env::var("HOST").unwrap_or(config.server.host);
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
