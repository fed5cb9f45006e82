//! HTTP surface tests
//!
//! Drives the assembled router (all middleware layers installed) with
//! in-process requests: health, actor extraction and the sale endpoint.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use inventory_server::api;
use inventory_server::{Config, ServerState};
use shared::Actor;
use shared::models::ProductCreate;
use tempfile::TempDir;
use tower::ServiceExt;

async fn test_state() -> (ServerState, TempDir) {
    let dir = TempDir::new().expect("temp dir");
    let config = Config {
        work_dir: dir.path().to_string_lossy().into_owned(),
        http_port: 0,
        database_path: dir
            .path()
            .join("inventory.db")
            .to_string_lossy()
            .into_owned(),
        environment: "test".into(),
        log_dir: None,
        request_timeout_ms: 30_000,
    };
    let state = ServerState::initialize(&config).await.expect("state");
    (state, dir)
}

async fn seed_product(state: &ServerState, sku: &str, initial_quantity: i64) -> i64 {
    state
        .stock
        .create_product(
            ProductCreate {
                name: format!("Test {sku}"),
                category: "beverages".into(),
                supplier: None,
                cost_price: 1.0,
                sell_price: 2.5,
                sku: sku.into(),
                image: None,
                initial_quantity: Some(initial_quantity),
                reorder_level: Some(2),
                max_stock_level: Some(100),
                location: None,
            },
            &Actor::new(1, "manager"),
        )
        .await
        .expect("seed product")
        .id
}

#[tokio::test]
async fn health_endpoint_responds() {
    let (state, _dir) = test_state().await;
    let app = api::build_router(state);

    let response = app
        .oneshot(
            Request::get("/api/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn mutating_request_without_actor_is_unauthorized() {
    let (state, _dir) = test_state().await;
    let app = api::build_router(state);

    let response = app
        .oneshot(
            Request::post("/api/sales")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn sale_with_actor_headers_is_created() {
    let (state, _dir) = test_state().await;
    let product_id = seed_product(&state, "HTTP-001", 10).await;
    let app = api::build_router(state);

    let body = serde_json::json!({
        "product_id": product_id,
        "quantity": 2,
        "unit_price": 2.5,
        "payment_method": "cash",
    });
    let response = app
        .oneshot(
            Request::post("/api/sales")
                .header(header::CONTENT_TYPE, "application/json")
                .header("x-actor-id", "7")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn overdraw_maps_to_conflict_with_availability() {
    let (state, _dir) = test_state().await;
    let product_id = seed_product(&state, "HTTP-002", 3).await;
    let app = api::build_router(state);

    let body = serde_json::json!({
        "product_id": product_id,
        "quantity": 5,
        "unit_price": 2.5,
        "payment_method": "card",
    });
    let response = app
        .oneshot(
            Request::post("/api/sales")
                .header(header::CONTENT_TYPE, "application/json")
                .header("x-actor-id", "7")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
