//! Sale flow integration tests
//!
//! Full-stack through `ServerState::initialize` (real SQLite file, real
//! migrations): the transactional deduct-and-log path, overdraw rejection
//! and conservation under concurrent cashiers.

use inventory_server::db::repository::{
    AlertRepository, InventoryRepository, MovementRepository, SaleRepository,
};
use inventory_server::services::ServiceError;
use inventory_server::{Config, ServerState};
use rand::Rng;
use shared::Actor;
use shared::models::{
    AlertStatus, AlertType, MovementKind, PaymentMethod, ProductCreate, SaleCreate,
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

fn cashier() -> Actor {
    Actor::new(7, "staff")
}

async fn seed_product(
    state: &ServerState,
    sku: &str,
    initial_quantity: i64,
    reorder_level: i64,
) -> i64 {
    let product = state
        .stock
        .create_product(
            ProductCreate {
                name: format!("Test {sku}"),
                category: "beverages".into(),
                supplier: Some("Acme Wholesale".into()),
                cost_price: 1.2,
                sell_price: 2.5,
                sku: sku.into(),
                image: None,
                initial_quantity: Some(initial_quantity),
                reorder_level: Some(reorder_level),
                max_stock_level: Some(100),
                location: Some("A-01".into()),
            },
            &cashier(),
        )
        .await
        .expect("seed product");
    product.id
}

fn sale(product_id: i64, quantity: i64) -> SaleCreate {
    SaleCreate {
        product_id,
        quantity,
        unit_price: 2.5,
        payment_method: PaymentMethod::Cash,
    }
}

#[tokio::test]
async fn sale_deducts_stock_and_logs_one_movement() {
    let (state, _dir) = test_state().await;
    let product_id = seed_product(&state, "SKU-001", 20, 5).await;

    let receipt = state
        .sale_recorder
        .record_sale(sale(product_id, 3), &cashier())
        .await
        .expect("sale");

    assert_eq!(receipt.new_quantity, 17);
    assert_eq!(receipt.sale.total_amount, 7.5);
    assert_eq!(receipt.sale.cashier_id, 7);
    assert!(!receipt.low_stock_alert_raised);

    let record = InventoryRepository::new(state.db.pool.clone())
        .find_by_product(product_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.quantity, 17);

    // Exactly one sale movement, paired with the decrement
    let movements = MovementRepository::new(state.db.pool.clone())
        .find_by_product(product_id, 100)
        .await
        .unwrap();
    let sales: Vec<_> = movements
        .iter()
        .filter(|m| m.kind == MovementKind::Sale)
        .collect();
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].delta, -3);
    assert_eq!(sales[0].previous_quantity, 20);
    assert_eq!(sales[0].new_quantity, 17);
    assert_eq!(sales[0].actor_id, 7);
}

#[tokio::test]
async fn sale_crossing_reorder_level_raises_low_stock_alert() {
    let (state, _dir) = test_state().await;
    let product_id = seed_product(&state, "SKU-002", 20, 15).await;

    let receipt = state
        .sale_recorder
        .record_sale(sale(product_id, 6), &cashier())
        .await
        .expect("sale");

    assert_eq!(receipt.new_quantity, 14);
    assert!(receipt.low_stock_alert_raised);

    let alerts = AlertRepository::new(state.db.pool.clone())
        .find_all(Some(AlertStatus::Active))
        .await
        .unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].product_id, product_id);
    assert_eq!(alerts[0].alert_type, AlertType::LowStock);
}

#[tokio::test]
async fn sale_to_zero_raises_critical_out_of_stock() {
    let (state, _dir) = test_state().await;
    let product_id = seed_product(&state, "SKU-003", 5, 5).await;

    let receipt = state
        .sale_recorder
        .record_sale(sale(product_id, 5), &cashier())
        .await
        .expect("sale");
    assert_eq!(receipt.new_quantity, 0);

    let alerts = AlertRepository::new(state.db.pool.clone())
        .find_all(Some(AlertStatus::Active))
        .await
        .unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].alert_type, AlertType::OutOfStock);
}

#[tokio::test]
async fn insufficient_stock_is_rejected_without_side_effects() {
    let (state, _dir) = test_state().await;
    let product_id = seed_product(&state, "SKU-004", 3, 1).await;

    let err = state
        .sale_recorder
        .record_sale(sale(product_id, 5), &cashier())
        .await
        .expect_err("overdraw must fail");
    match err {
        ServiceError::InsufficientStock {
            available,
            requested,
        } => {
            assert_eq!(available, 3);
            assert_eq!(requested, 5);
        }
        other => panic!("expected InsufficientStock, got {other:?}"),
    }

    // Nothing changed: quantity intact, no sale row, no sale movement
    let record = InventoryRepository::new(state.db.pool.clone())
        .find_by_product(product_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.quantity, 3);

    let sales = SaleRepository::new(state.db.pool.clone())
        .find_all(None, None, 100)
        .await
        .unwrap();
    assert!(sales.is_empty());

    let movements = MovementRepository::new(state.db.pool.clone())
        .find_by_product(product_id, 100)
        .await
        .unwrap();
    assert!(movements.iter().all(|m| m.kind != MovementKind::Sale));
}

#[tokio::test]
async fn unknown_product_is_not_found() {
    let (state, _dir) = test_state().await;

    let err = state
        .sale_recorder
        .record_sale(sale(9999, 1), &cashier())
        .await
        .expect_err("unknown product");
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn zero_quantity_sale_is_rejected() {
    let (state, _dir) = test_state().await;
    let product_id = seed_product(&state, "SKU-005", 10, 2).await;

    let err = state
        .sale_recorder
        .record_sale(sale(product_id, 0), &cashier())
        .await
        .expect_err("zero quantity");
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn concurrent_sales_cannot_overdraw() {
    let (state, _dir) = test_state().await;
    let product_id = seed_product(&state, "SKU-006", 10, 2).await;

    // Two cashiers both try to sell 6 of 10; exactly one can win
    let s1 = state.clone();
    let s2 = state.clone();
    let t1 = tokio::spawn(async move {
        s1.sale_recorder
            .record_sale(sale(product_id, 6), &cashier())
            .await
    });
    let t2 = tokio::spawn(async move {
        s2.sale_recorder
            .record_sale(sale(product_id, 6), &cashier())
            .await
    });
    let (r1, r2) = (t1.await.unwrap(), t2.await.unwrap());

    let successes = [&r1, &r2].iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "exactly one of two overlapping sales may win");
    let loser = if r1.is_err() { r1 } else { r2 };
    assert!(matches!(
        loser,
        Err(ServiceError::InsufficientStock {
            available: 4,
            requested: 6
        })
    ));

    let record = InventoryRepository::new(state.db.pool.clone())
        .find_by_product(product_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.quantity, 4);
}

#[tokio::test]
async fn stock_is_conserved_under_concurrent_load() {
    let (state, _dir) = test_state().await;
    let product_id = seed_product(&state, "SKU-007", 200, 0).await;

    let mut tasks = Vec::new();
    for _ in 0..40 {
        let s = state.clone();
        tasks.push(tokio::spawn(async move {
            let quantity = rand::thread_rng().gen_range(1..=4);
            s.sale_recorder
                .record_sale(sale(product_id, quantity), &cashier())
                .await
                .map(|receipt| (quantity, receipt))
        }));
    }

    let mut sold = 0i64;
    let mut succeeded = 0usize;
    for task in tasks {
        if let Ok((quantity, _)) = task.await.unwrap() {
            sold += quantity;
            succeeded += 1;
        }
    }

    let record = InventoryRepository::new(state.db.pool.clone())
        .find_by_product(product_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.quantity, 200 - sold);
    assert!(record.quantity >= 0);

    // One movement per successful sale, and every movement balances
    let movements = MovementRepository::new(state.db.pool.clone())
        .find_by_product(product_id, 1000)
        .await
        .unwrap();
    let sale_movements: Vec<_> = movements
        .iter()
        .filter(|m| m.kind == MovementKind::Sale)
        .collect();
    assert_eq!(sale_movements.len(), succeeded);
    for m in &sale_movements {
        assert_eq!(m.new_quantity, m.previous_quantity + m.delta);
    }
}

#[tokio::test]
async fn recent_movements_span_products_newest_first() {
    let (state, _dir) = test_state().await;
    let first = seed_product(&state, "SKU-010", 10, 1).await;
    let second = seed_product(&state, "SKU-011", 10, 1).await;

    state
        .sale_recorder
        .record_sale(sale(first, 2), &cashier())
        .await
        .expect("sale");
    state
        .sale_recorder
        .record_sale(sale(second, 1), &cashier())
        .await
        .expect("sale");

    // Two initial-stock adjustments plus two sales, across both products
    let repo = MovementRepository::new(state.db.pool.clone());
    let movements = repo.find_recent(100).await.unwrap();
    assert_eq!(movements.len(), 4);
    assert!(movements.iter().any(|m| m.product_id == first));
    assert!(movements.iter().any(|m| m.product_id == second));
    assert!(movements.windows(2).all(|w| w[0].id > w[1].id));

    // Limit caps the result to the newest entries
    let newest = repo.find_recent(2).await.unwrap();
    assert_eq!(newest.len(), 2);
    assert_eq!(newest[0].product_id, second);
    assert_eq!(newest[0].kind, MovementKind::Sale);
}

#[tokio::test]
async fn sale_total_is_rounded_to_two_decimals() {
    let (state, _dir) = test_state().await;
    let product_id = seed_product(&state, "SKU-008", 10, 1).await;

    let receipt = state
        .sale_recorder
        .record_sale(
            SaleCreate {
                product_id,
                quantity: 3,
                unit_price: 6.666,
                payment_method: PaymentMethod::Card,
            },
            &cashier(),
        )
        .await
        .expect("sale");

    // 3 x 6.666 = 19.998 -> 20.00
    assert_eq!(receipt.sale.total_amount, 20.0);
}
