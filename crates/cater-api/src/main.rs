//! # Canela
//!
//! Catalog and quoting backend for the catering menu.
//!
//! ## Usage
//!
//! ```bash
//! # Optional settings
//! export PORT=8080
//! export STATIC_DIR=wwwroot
//! export CORS_ORIGINS=https://flordecanela.online
//!
//! # Run the server
//! canela
//! ```

use cater_api::{routes, AppConfig, AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    // Initialize logging
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();
    if config.json_logs {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }

    // Initialize application state
    let state = AppState::from_config(config)?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!(
        "Catalog: {} categories, {} items, {} packs",
        state.catalog.categories().len(),
        state.catalog.items().len(),
        state.catalog.pack_count()
    );
    info!("Front-end directory: {}", state.config.static_dir.display());

    // Create router
    let app = routes::create_router(state);

    info!("Canela starting on http://{}", addr);

    if !is_prod {
        info!("Catalog: GET http://{}/api/catalog", addr);
        info!("Quote: POST http://{}/api/quote", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
