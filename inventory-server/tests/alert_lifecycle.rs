//! Alert lifecycle integration tests
//!
//! Dedup of active alerts, explicit resolve/dismiss transitions, overstock
//! and price-change notes. Alerts are advisory: nothing here may affect the
//! inventory operations that triggered them.

use inventory_server::db::repository::AlertRepository;
use inventory_server::services::ServiceError;
use inventory_server::{Config, ServerState};
use shared::Actor;
use shared::models::{
    AdjustRequest, AlertStatus, AlertType, PaymentMethod, ProductCreate, ProductUpdate,
    RestockRequest, SaleCreate,
};
use tempfile::TempDir;

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

fn manager() -> Actor {
    Actor::new(1, "manager")
}

async fn seed_product(
    state: &ServerState,
    sku: &str,
    initial_quantity: i64,
    reorder_level: i64,
    max_stock_level: i64,
) -> i64 {
    state
        .stock
        .create_product(
            ProductCreate {
                name: format!("Test {sku}"),
                category: "snacks".into(),
                supplier: None,
                cost_price: 0.8,
                sell_price: 1.5,
                sku: sku.into(),
                image: None,
                initial_quantity: Some(initial_quantity),
                reorder_level: Some(reorder_level),
                max_stock_level: Some(max_stock_level),
                location: None,
            },
            &manager(),
        )
        .await
        .expect("seed product")
        .id
}

fn sale(product_id: i64, quantity: i64) -> SaleCreate {
    SaleCreate {
        product_id,
        quantity,
        unit_price: 1.5,
        payment_method: PaymentMethod::Cash,
    }
}

async fn active_alerts(state: &ServerState) -> Vec<shared::models::Alert> {
    AlertRepository::new(state.db.pool.clone())
        .find_all(Some(AlertStatus::Active))
        .await
        .unwrap()
}

#[tokio::test]
async fn repeated_low_stock_sales_raise_only_one_alert() {
    let (state, _dir) = test_state().await;
    let product_id = seed_product(&state, "ALT-001", 10, 8, 100).await;

    for _ in 0..3 {
        state
            .sale_recorder
            .record_sale(sale(product_id, 1), &manager())
            .await
            .expect("sale");
    }

    let alerts = active_alerts(&state).await;
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].alert_type, AlertType::LowStock);
}

#[tokio::test]
async fn active_low_stock_suppresses_out_of_stock() {
    let (state, _dir) = test_state().await;
    let product_id = seed_product(&state, "ALT-002", 3, 5, 100).await;

    // First sale raises low_stock; second drains to zero but the active
    // low_stock alert suppresses the out_of_stock one
    state
        .sale_recorder
        .record_sale(sale(product_id, 1), &manager())
        .await
        .expect("sale");
    state
        .sale_recorder
        .record_sale(sale(product_id, 2), &manager())
        .await
        .expect("sale");

    let alerts = active_alerts(&state).await;
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].alert_type, AlertType::LowStock);
}

#[tokio::test]
async fn resolve_transitions_and_is_single_shot() {
    let (state, _dir) = test_state().await;
    let product_id = seed_product(&state, "ALT-003", 5, 5, 100).await;

    state
        .sale_recorder
        .record_sale(sale(product_id, 1), &manager())
        .await
        .expect("sale");
    let alert_id = active_alerts(&state).await[0].id;

    state
        .alert_engine
        .resolve(alert_id, &manager(), Some("restock ordered"))
        .await
        .expect("resolve");

    let repo = AlertRepository::new(state.db.pool.clone());
    let alert = repo.find_by_id(alert_id).await.unwrap().unwrap();
    assert_eq!(alert.status, AlertStatus::Resolved);
    assert_eq!(alert.resolved_by, Some(1));
    assert!(alert.resolved_at.is_some());

    // Resolving a non-active alert is an error, not a silent no-op
    let err = state
        .alert_engine
        .resolve(alert_id, &manager(), None)
        .await
        .expect_err("second resolve");
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn dismiss_transitions_an_active_alert() {
    let (state, _dir) = test_state().await;
    let product_id = seed_product(&state, "ALT-004", 5, 5, 100).await;

    state
        .sale_recorder
        .record_sale(sale(product_id, 1), &manager())
        .await
        .expect("sale");
    let alert_id = active_alerts(&state).await[0].id;

    state
        .alert_engine
        .dismiss(alert_id, &manager())
        .await
        .expect("dismiss");

    let alert = AlertRepository::new(state.db.pool.clone())
        .find_by_id(alert_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(alert.status, AlertStatus::Dismissed);

    let err = state
        .alert_engine
        .dismiss(alert_id, &manager())
        .await
        .expect_err("second dismiss");
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn restock_never_auto_resolves_alerts() {
    let (state, _dir) = test_state().await;
    let product_id = seed_product(&state, "ALT-005", 5, 5, 100).await;

    state
        .sale_recorder
        .record_sale(sale(product_id, 1), &manager())
        .await
        .expect("sale");
    assert_eq!(active_alerts(&state).await.len(), 1);

    state
        .stock
        .restock(
            product_id,
            RestockRequest {
                quantity: 50,
                reason: None,
            },
            &manager(),
        )
        .await
        .expect("restock");

    // Stock is back above the threshold, but the alert stays active until
    // someone resolves it
    let alerts = active_alerts(&state).await;
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].alert_type, AlertType::LowStock);
}

#[tokio::test]
async fn restock_past_max_raises_one_overstock_alert() {
    let (state, _dir) = test_state().await;
    let product_id = seed_product(&state, "ALT-006", 10, 2, 50).await;

    // Crosses the maximum on the second restock; the third re-evaluates
    // against an already-active alert and must dedup
    for _ in 0..3 {
        state
            .stock
            .restock(
                product_id,
                RestockRequest {
                    quantity: 30,
                    reason: Some("bulk order".into()),
                },
                &manager(),
            )
            .await
            .expect("restock");
    }

    let alerts = active_alerts(&state).await;
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].alert_type, AlertType::Overstock);
}

#[tokio::test]
async fn sell_price_change_raises_advisory_note() {
    let (state, _dir) = test_state().await;
    let product_id = seed_product(&state, "ALT-007", 10, 2, 100).await;

    state
        .stock
        .update_product(
            product_id,
            ProductUpdate {
                sell_price: Some(1.95),
                ..Default::default()
            },
            &manager(),
        )
        .await
        .expect("update");

    let alerts = active_alerts(&state).await;
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].alert_type, AlertType::PriceChange);
    assert!(alerts[0].message.contains("1.95"));
}

#[tokio::test]
async fn adjustment_to_zero_raises_out_of_stock() {
    let (state, _dir) = test_state().await;
    let product_id = seed_product(&state, "ALT-008", 10, 2, 100).await;

    state
        .stock
        .adjust(
            product_id,
            AdjustRequest {
                new_quantity: 0,
                kind: None,
                reason: "stocktake: all units damaged".into(),
            },
            &manager(),
        )
        .await
        .expect("adjust");

    let alerts = active_alerts(&state).await;
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].alert_type, AlertType::OutOfStock);
}
