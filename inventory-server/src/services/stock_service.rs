//! Stock Service (administrative mutations)
//!
//! Product creation and direct inventory changes (restock/adjustment) follow
//! the same contract as the sale recorder: every quantity change pairs with
//! exactly one stock movement, inside one transaction.

use chrono::Utc;
use shared::Actor;
use shared::models::{
    AdjustRequest, InventoryRecord, MovementKind, Product, ProductCreate, ProductUpdate,
    RestockRequest,
};
use validator::Validate;

use super::{AlertEngine, ServiceError, ServiceResult};
use crate::db::DbService;
use crate::db::repository::{
    InventoryRepository, MovementInsert, MovementRepository, ProductRepository,
};

const DEFAULT_REORDER_LEVEL: i64 = 10;
const DEFAULT_MAX_STOCK_LEVEL: i64 = 100;

const RECORD_SELECT: &str = "SELECT product_id, quantity, reorder_level, max_stock_level, \
     location, last_restocked_at FROM inventory WHERE product_id = ?";

#[derive(Clone)]
pub struct StockService {
    db: DbService,
    alerts: AlertEngine,
}

impl StockService {
    pub fn new(db: DbService, alerts: AlertEngine) -> Self {
        Self { db, alerts }
    }

    /// Create a product together with its one-to-one inventory record
    ///
    /// A non-zero initial quantity is logged as an adjustment movement from
    /// zero, so even the first stock on the shelf has an audit entry.
    pub async fn create_product(&self, input: ProductCreate, actor: &Actor) -> ServiceResult<Product> {
        input.validate()?;

        let now = Utc::now();
        let initial_quantity = input.initial_quantity.unwrap_or(0);
        let mut tx = self.db.pool.begin().await?;

        let product_id = ProductRepository::insert(&mut tx, &input, now).await?;
        InventoryRepository::insert(
            &mut tx,
            product_id,
            initial_quantity,
            input.reorder_level.unwrap_or(DEFAULT_REORDER_LEVEL),
            input.max_stock_level.unwrap_or(DEFAULT_MAX_STOCK_LEVEL),
            input.location.as_deref(),
        )
        .await?;

        if initial_quantity > 0 {
            MovementRepository::insert(
                &mut tx,
                &MovementInsert {
                    product_id,
                    kind: MovementKind::Adjustment,
                    delta: initial_quantity,
                    previous_quantity: 0,
                    new_quantity: initial_quantity,
                    reason: Some("initial stock".to_string()),
                    actor_id: actor.id,
                    created_at: now,
                },
            )
            .await?;
        }

        tx.commit().await?;

        tracing::info!(product_id, sku = %input.sku, "product created");

        ProductRepository::new(self.db.pool.clone())
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("product {product_id}")))
    }

    /// Update descriptive product fields; a sell-price change raises an
    /// advisory price_change alert (best-effort)
    pub async fn update_product(
        &self,
        id: i64,
        data: ProductUpdate,
        actor: &Actor,
    ) -> ServiceResult<Product> {
        data.validate()?;

        let repo = ProductRepository::new(self.db.pool.clone());
        let before = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("product {id}")))?;

        let new_price = data.sell_price;
        let updated = repo.update(id, &data).await?;

        tracing::info!(product_id = id, actor_id = actor.id, "product updated");

        if let Some(price) = new_price
            && price != before.sell_price
            && let Err(e) = self.alerts.note_price_change(id, before.sell_price, price).await
        {
            tracing::warn!(target: "alerts", error = %e, product_id = id, "price change note failed");
        }

        Ok(updated)
    }

    /// Add stock, stamping last_restocked_at
    ///
    /// Restocks never auto-resolve existing low-stock alerts; they may raise
    /// an overstock alert (best-effort, post-commit).
    pub async fn restock(
        &self,
        product_id: i64,
        req: RestockRequest,
        actor: &Actor,
    ) -> ServiceResult<InventoryRecord> {
        req.validate()?;

        let now = Utc::now();
        let mut tx = self.db.pool.begin().await?;

        let updated = sqlx::query(
            "UPDATE inventory SET quantity = quantity + ?1, last_restocked_at = ?3 \
             WHERE product_id = ?2",
        )
        .bind(req.quantity)
        .bind(product_id)
        .bind(now)
        .execute(&mut *tx)
        .await?;
        if updated.rows_affected() == 0 {
            return Err(ServiceError::NotFound(format!(
                "inventory for product {product_id}"
            )));
        }

        let record: InventoryRecord = sqlx::query_as(RECORD_SELECT)
            .bind(product_id)
            .fetch_one(&mut *tx)
            .await?;

        MovementRepository::insert(
            &mut tx,
            &MovementInsert {
                product_id,
                kind: MovementKind::Restock,
                delta: req.quantity,
                previous_quantity: record.quantity - req.quantity,
                new_quantity: record.quantity,
                reason: req.reason.clone(),
                actor_id: actor.id,
                created_at: now,
            },
        )
        .await?;

        tx.commit().await?;

        tracing::info!(product_id, quantity = req.quantity, new_quantity = record.quantity, "restocked");

        if let Err(e) = self
            .alerts
            .evaluate_overstock(product_id, record.quantity, record.max_stock_level)
            .await
        {
            tracing::warn!(target: "alerts", error = %e, product_id, "post-restock alert evaluation failed");
        }

        Ok(record)
    }

    /// Set the absolute quantity (stocktake correction, return, damage
    /// write-off), logging the delta
    pub async fn adjust(
        &self,
        product_id: i64,
        req: AdjustRequest,
        actor: &Actor,
    ) -> ServiceResult<InventoryRecord> {
        req.validate()?;

        let kind = req.kind.unwrap_or(MovementKind::Adjustment);
        if matches!(kind, MovementKind::Sale | MovementKind::Restock) {
            return Err(ServiceError::Validation(
                "adjustment kind must be adjustment, return or damage".into(),
            ));
        }

        let now = Utc::now();
        let mut tx = self.db.pool.begin().await?;

        let previous: Option<(i64,)> =
            sqlx::query_as("SELECT quantity FROM inventory WHERE product_id = ?")
                .bind(product_id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some((previous_quantity,)) = previous else {
            return Err(ServiceError::NotFound(format!(
                "inventory for product {product_id}"
            )));
        };

        if previous_quantity == req.new_quantity {
            // No change, no movement
            drop(tx);
            return InventoryRepository::new(self.db.pool.clone())
                .find_by_product(product_id)
                .await?
                .ok_or_else(|| ServiceError::NotFound(format!("inventory for product {product_id}")));
        }

        sqlx::query("UPDATE inventory SET quantity = ?1 WHERE product_id = ?2")
            .bind(req.new_quantity)
            .bind(product_id)
            .execute(&mut *tx)
            .await?;

        MovementRepository::insert(
            &mut tx,
            &MovementInsert {
                product_id,
                kind,
                delta: req.new_quantity - previous_quantity,
                previous_quantity,
                new_quantity: req.new_quantity,
                reason: Some(req.reason.clone()),
                actor_id: actor.id,
                created_at: now,
            },
        )
        .await?;

        let record: InventoryRecord = sqlx::query_as(RECORD_SELECT)
            .bind(product_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(
            product_id,
            kind = kind.as_str(),
            previous_quantity,
            new_quantity = req.new_quantity,
            "inventory adjusted"
        );

        if record.quantity <= record.reorder_level
            && let Err(e) = self
                .alerts
                .evaluate_low_stock(product_id, record.quantity, record.reorder_level)
                .await
        {
            tracing::warn!(target: "alerts", error = %e, product_id, "post-adjust alert evaluation failed");
        }

        Ok(record)
    }
}
