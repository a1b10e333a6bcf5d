//! # Routes
//!
//! Axum router configuration for the catalog API.
//! Everything under `/api` is JSON; any other unmatched path serves the
//! bundled front-end so client-side routes survive a reload.

use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::Request,
    http::{
        header::{
            CACHE_CONTROL, CONTENT_TYPE, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
        },
        HeaderName, HeaderValue,
    },
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::warn;

/// Prefix for JSON routes; never answered by the front-end fallback
pub const API_PREFIX: &str = "/api";

const INDEX_CACHE_CONTROL: &str = "no-store, no-cache, must-revalidate";
const ASSET_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// Create the main application router
///
/// Routes:
/// - API:
///   - GET  /api/hello - Greeting and server time
///   - GET  /api/catalog - Categories and items
///   - GET  /api/items/{item_id} - Single item
///   - GET  /api/packs?type= - Packs, optionally filtered by type
///   - GET  /api/terms - Ordering terms and contact
///   - POST /api/quote - Price a selection
///
/// - GET /health - Health check
/// - anything else - static files, falling back to index.html
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/hello", get(handlers::hello))
        .route("/catalog", get(handlers::get_catalog))
        .route("/items/{item_id}", get(handlers::get_item))
        .route("/packs", get(handlers::list_packs))
        .route("/terms", get(handlers::get_terms))
        .route("/quote", post(handlers::create_quote))
        .fallback(handlers::api_not_found);

    let layers = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config.cors_origins))
        .layer(CompressionLayer::new())
        .layer(SetResponseHeaderLayer::overriding(
            X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("permissions-policy"),
            HeaderValue::from_static("geolocation=(), microphone=()"),
        ))
        .layer(middleware::from_fn(static_cache_control));

    let frontend = frontend_service(&state.config.static_dir);

    Router::new()
        .route("/health", get(handlers::health))
        .nest(API_PREFIX, api_routes)
        .fallback_service(frontend)
        .layer(layers)
        .with_state(state)
}

/// Static files from `dir`, with `index.html` for anything not on disk
fn frontend_service(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}

/// CORS for the configured origins, or any origin when none are configured
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() || origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins.iter().filter_map(|origin| {
            HeaderValue::from_str(origin)
                .inspect_err(|_| warn!("Ignoring invalid CORS origin: {}", origin))
                .ok()
        }))
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

fn is_api_path(path: &str) -> bool {
    path == API_PREFIX || path.starts_with("/api/") || path == "/health"
}

/// Cache policy for front-end responses: the entry document is never cached,
/// fingerprinted assets are cached for a year.
async fn static_cache_control(request: Request, next: Next) -> Response {
    let is_api = is_api_path(request.uri().path());
    let mut response = next.run(request).await;

    if is_api || !response.status().is_success() || response.headers().contains_key(CACHE_CONTROL) {
        return response;
    }

    let is_html = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("text/html"));

    let policy = if is_html {
        INDEX_CACHE_CONTROL
    } else {
        ASSET_CACHE_CONTROL
    };
    response
        .headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static(policy));
    response
}
