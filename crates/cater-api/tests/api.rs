use axum::http::{header, StatusCode};
use axum_test::TestServer;
use cater_api::{create_router, AppConfig, AppState};
use cater_core::{Catalog, Price, QuoteResult};
use serde_json::{json, Value};
use tempfile::TempDir;

struct Harness {
    server: TestServer,
    _static_dir: TempDir,
}

fn harness() -> Harness {
    let static_dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(
        static_dir.path().join("index.html"),
        "<!doctype html><html><body>canela spa</body></html>",
    )
    .expect("write index.html");
    std::fs::write(static_dir.path().join("app.js"), "console.log('canela');").expect("write app.js");

    let config = AppConfig {
        static_dir: static_dir.path().to_path_buf(),
        ..AppConfig::default()
    };
    let state = AppState::with_catalog(Catalog::embedded().expect("catalog"), config);
    let server = TestServer::new(create_router(state)).expect("test server");

    Harness {
        server,
        _static_dir: static_dir,
    }
}

fn pack_ids(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("pack array")
        .iter()
        .map(|p| p["id"].as_str().expect("pack id").to_string())
        .collect()
}

#[tokio::test]
async fn health_reports_catalog_size() {
    let h = harness();
    let response = h.server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["items"], 95);
    assert_eq!(body["packs"], 12);
}

#[tokio::test]
async fn hello_returns_server_time() {
    let h = harness();
    let response = h.server.get("/api/hello").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
    let server_time = body["serverTime"].as_str().expect("serverTime");
    assert!(chrono::DateTime::parse_from_rfc3339(server_time).is_ok());
}

#[tokio::test]
async fn catalog_lists_categories_and_items() {
    let h = harness();
    let response = h.server.get("/api/catalog").await;
    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["categories"].as_array().map(Vec::len), Some(6));
    assert_eq!(body["items"].as_array().map(Vec::len), Some(95));
    assert_eq!(body["categories"][0]["id"], "salados");

    let first = &body["items"][0];
    assert_eq!(first["id"], "mini-cheese-bacon-burger");
    assert_eq!(first["categoryId"], "salados");
    assert_eq!(first["priceTiers"][0]["quantity"], 25);
    assert_eq!(first["priceTiers"][0]["price"], 89);
}

#[tokio::test]
async fn single_item_lookup() {
    let h = harness();
    let response = h.server.get("/api/items/cafe-pasado").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "Café pasado");
    assert_eq!(body["priceTiers"], json!([]));

    let response = h.server.get("/api/items/no-existe").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["code"], 404);
    assert_eq!(body["error"], "Item not found: no-existe");
}

#[tokio::test]
async fn packs_unfiltered_lists_variado_then_salado() {
    let h = harness();
    let response = h.server.get("/api/packs").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        pack_ids(&body),
        vec!["pv-1", "pv-2", "pv-3", "pv-4", "pv-5", "pv-6", "ps-1", "ps-2", "ps-3", "ps-4", "ps-5", "ps-6"]
    );
    assert_eq!(body[0]["pieceCount"], 125);
    assert_eq!(body[0]["servingSize"], "15–20 personas");
    assert_eq!(body[0]["price"], 325);
}

#[tokio::test]
async fn packs_filter_ignores_case() {
    let h = harness();
    let lower: Value = h.server.get("/api/packs").add_query_param("type", "variado").await.json();
    let upper: Value = h.server.get("/api/packs").add_query_param("type", "VARIADO").await.json();
    assert_eq!(pack_ids(&lower), vec!["pv-1", "pv-2", "pv-3", "pv-4", "pv-5", "pv-6"]);
    assert_eq!(lower, upper);

    let salado: Value = h.server.get("/api/packs").add_query_param("tipo", "Salado").await.json();
    assert_eq!(pack_ids(&salado), vec!["ps-1", "ps-2", "ps-3", "ps-4", "ps-5", "ps-6"]);
}

#[tokio::test]
async fn packs_unknown_type_is_empty() {
    let h = harness();
    let response = h.server.get("/api/packs").add_query_param("type", "dulce").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn quote_prices_items_and_packs() {
    let h = harness();
    let response = h
        .server
        .post("/api/quote")
        .json(&json!({
            "items": [{ "id": "mini-cheese-bacon-burger", "qty": 25 }],
            "packs": [{ "id": "pv-1", "count": 2 }]
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(
        body,
        json!({
            "lines": [
                { "label": "Mini Cheese & Bacon Burger × 25", "subtotal": 89 },
                { "label": "Pack Variado #1 × 2", "subtotal": 650 }
            ],
            "total": 739
        })
    );

    let quote: QuoteResult = response.json();
    assert_eq!(quote.total, Price::from_soles(739));
}

#[tokio::test]
async fn quote_drops_unknown_entries() {
    let h = harness();
    let response = h
        .server
        .post("/api/quote")
        .json(&json!({ "items": [{ "id": "no-existe", "qty": 25 }], "packs": [] }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "lines": [], "total": 0 }));

    let response = h
        .server
        .post("/api/quote")
        .json(&json!({
            "items": [{ "id": "cafe-pasado", "qty": 5 }, { "id": "orejitas", "qty": 30 }],
            "packs": [{ "id": "px-9", "count": 1 }]
        }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "lines": [], "total": 0 }));
}

#[tokio::test]
async fn quote_accepts_missing_collections() {
    let h = harness();
    let response = h
        .server
        .post("/api/quote")
        .json(&json!({ "packs": [{ "id": "ps-1", "count": 1 }] }))
        .await;
    response.assert_status_ok();
    let quote: QuoteResult = response.json();
    assert_eq!(quote.lines.len(), 1);
    assert_eq!(quote.total, Price::from_soles(318));
}

#[tokio::test]
async fn quote_prices_zero_pack_count_as_zero_line() {
    let h = harness();
    let response = h
        .server
        .post("/api/quote")
        .json(&json!({ "packs": [{ "id": "pv-1", "count": 0 }] }))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "lines": [{ "label": "Pack Variado #1 × 0", "subtotal": 0 }], "total": 0 })
    );
}

#[tokio::test]
async fn malformed_quote_is_bad_request() {
    let h = harness();

    let response = h
        .server
        .post("/api/quote")
        .json(&json!({ "items": [{ "id": "orejitas" }] }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], 400);
    assert!(body["details"].is_string());

    let response = h
        .server
        .post("/api/quote")
        .json(&json!({ "packs": [{ "id": "pv-1", "count": -2 }] }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = h.server.post("/api/quote").text("items=orejitas").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn terms_are_static_metadata() {
    let h = harness();
    let response = h.server.get("/api/terms").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["advanceNoticeHours"], 48);
    assert_eq!(body["deliveryIncluded"], false);
    assert_eq!(body["driverWaitMinutes"], 10);
    assert!(body["receiptTypes"].is_string());
    assert!(body["minimumOrderPolicy"].is_string());
    assert_eq!(body["paymentMethods"].as_array().map(Vec::len), Some(3));
    assert!(body["policies"].is_array());
    assert!(body["notes"].is_array());
    assert_eq!(body["contact"]["email"], "vntas.flordecanela@gmail.com");
}

#[tokio::test]
async fn unknown_api_route_is_json_not_found() {
    let h = harness();
    let response = h.server.get("/api/does-not-exist").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn other_routes_fall_back_to_index() {
    let h = harness();
    let response = h.server.get("/menu/dulces").await;
    response.assert_status_ok();
    assert!(response.text().contains("canela spa"));
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).and_then(|v| v.to_str().ok()),
        Some("no-store, no-cache, must-revalidate")
    );
}

#[tokio::test]
async fn assets_are_cached_long_term() {
    let h = harness();
    let response = h.server.get("/app.js").await;
    response.assert_status_ok();
    assert!(response.text().contains("canela"));
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).and_then(|v| v.to_str().ok()),
        Some("public, max-age=31536000, immutable")
    );
}

#[tokio::test]
async fn security_headers_are_set() {
    let h = harness();
    let response = h.server.get("/api/hello").await;
    let headers = response.headers();
    assert_eq!(headers.get(header::X_CONTENT_TYPE_OPTIONS).and_then(|v| v.to_str().ok()), Some("nosniff"));
    assert_eq!(headers.get(header::X_FRAME_OPTIONS).and_then(|v| v.to_str().ok()), Some("DENY"));
    assert_eq!(
        headers.get(header::REFERRER_POLICY).and_then(|v| v.to_str().ok()),
        Some("strict-origin-when-cross-origin")
    );
    assert!(headers.get("permissions-policy").is_some());
    assert!(headers.get(header::CACHE_CONTROL).is_none());
}
