//! # cater-api
//!
//! HTTP API layer for the catering catalog.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - JSON endpoints for the catalog, packs, terms and quotes
//! - Static hosting of the bundled front-end
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/api/hello` | Greeting and server time |
//! | GET | `/api/catalog` | Categories and items |
//! | GET | `/api/items/{id}` | Get item |
//! | GET | `/api/packs?type=` | List packs |
//! | GET | `/api/terms` | Ordering terms |
//! | POST | `/api/quote` | Compute a quote |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
