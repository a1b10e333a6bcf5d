//! # Request Handlers
//!
//! Axum request handlers for the catalog and quoting API.
//! Handlers only parse parameters and shape responses; pricing lives in
//! `cater_core`.

use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cater_core::{calculate_quote, CatalogError, QuoteRequest, QuoteResult};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Query string for the pack listing
#[derive(Debug, Default, Deserialize)]
pub struct PackQuery {
    /// Pack type filter ("variado", "salado"); `tipo` is accepted too
    #[serde(default, rename = "type", alias = "tipo")]
    pub pack_type: Option<String>,
}

impl PackQuery {
    /// Filter value, treating a blank parameter as absent
    fn filter(&self) -> Option<&str> {
        self.pack_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn catalog_error_to_response(err: CatalogError) -> ApiError {
    let code = err.status_code();
    let response = ErrorResponse::new(err.to_string(), code);
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(response),
    )
}

fn rejection_to_response(rejection: JsonRejection) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new("Malformed request body", 400).with_details(rejection.body_text())),
    )
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "canela",
        "version": env!("CARGO_PKG_VERSION"),
        "items": state.catalog.items().len(),
        "packs": state.catalog.pack_count(),
    }))
}

/// Liveness greeting with the server clock
pub async fn hello() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Hola 👋, backend listo",
        "serverTime": Utc::now().to_rfc3339(),
    }))
}

/// Categories and items
pub async fn get_catalog(State(state): State<AppState>) -> Response {
    Json(state.catalog.listing()).into_response()
}

/// Get single item
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Response, ApiError> {
    let item = state
        .catalog
        .require_item(&item_id)
        .map_err(catalog_error_to_response)?;

    Ok(Json(item).into_response())
}

/// Packs, optionally filtered by type
pub async fn list_packs(State(state): State<AppState>, Query(query): Query<PackQuery>) -> Response {
    let packs: Vec<_> = state.catalog.packs(query.filter()).collect();
    Json(packs).into_response()
}

/// Ordering terms and contact details
pub async fn get_terms(State(state): State<AppState>) -> Response {
    Json(state.catalog.terms()).into_response()
}

/// Price a selection of items and packs
#[instrument(skip(state, body))]
pub async fn create_quote(
    State(state): State<AppState>,
    body: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<QuoteResult>, ApiError> {
    let Json(request) = body.map_err(|rejection| {
        warn!("Rejected quote request: {}", rejection.body_text());
        rejection_to_response(rejection)
    })?;

    let quote = calculate_quote(&state.catalog, &request);

    info!(
        "Computed quote: {} of {} entries priced, total={}",
        quote.lines.len(),
        request.entry_count(),
        quote.total.display()
    );

    Ok(Json(quote))
}

/// Unknown route under the API prefix
pub async fn api_not_found() -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Route not found", 404)),
    )
}
