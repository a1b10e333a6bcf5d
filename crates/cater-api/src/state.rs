//! # Application State
//!
//! Shared state for the Axum application.
//! Holds the immutable catalog and the runtime configuration.

use anyhow::Context;
use cater_core::{Catalog, CatalogError, CatalogResult};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Directory holding the bundled front-end (index.html + assets)
    pub static_dir: PathBuf,
    /// Origins allowed by CORS; empty allows any origin
    pub cors_origins: Vec<String>,
    /// Optional catalog file replacing the embedded one
    pub catalog_path: Option<PathBuf>,
    /// Emit logs as JSON lines
    pub json_logs: bool,
}

impl AppConfig {
    /// Load from environment variables (and `.env` if present)
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("wwwroot")),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(str::trim)
                        .filter(|o| !o.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
            catalog_path: lookup("CATALOG_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            json_logs: lookup("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json")),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Catalog, built once at startup
    pub catalog: Arc<Catalog>,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create state for `config`, loading the catalog it points at
    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let catalog = load_catalog(config.catalog_path.as_deref())?;
        Ok(Self::with_catalog(catalog, config))
    }

    /// Create state around an already loaded catalog
    pub fn with_catalog(catalog: Catalog, config: AppConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config,
        }
    }
}

/// Load the catalog from `path`, or the embedded copy when no path is set
pub fn load_catalog(path: Option<&Path>) -> CatalogResult<Catalog> {
    let Some(path) = path else {
        let catalog = Catalog::embedded()?;
        info!(
            "Loaded embedded catalog: {} items, {} packs",
            catalog.items().len(),
            catalog.pack_count()
        );
        return Ok(catalog);
    };

    let content = std::fs::read_to_string(path).map_err(|e| {
        CatalogError::Configuration(format!("failed to read {}: {}", path.display(), e))
    })?;
    let catalog = Catalog::from_toml(&content).inspect_err(|e| {
        if e.is_data_error() {
            warn!("Catalog at {} rejected: {}", path.display(), e);
        }
    })?;
    info!(
        "Loaded {} items, {} packs from {}",
        catalog.items().len(),
        catalog.pack_count(),
        path.display()
    );
    Ok(catalog)
}
