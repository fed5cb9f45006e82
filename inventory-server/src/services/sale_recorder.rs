//! Sale Recorder
//!
//! Orchestrates the transactional sale flow: validate → check availability →
//! deduct → log movement → commit → evaluate alert condition. Everything up
//! to the commit is one SQLite transaction; a failure at any step rolls the
//! whole thing back, so partial application is impossible. The post-commit
//! alert evaluation is best-effort and never fails the sale.

use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use shared::Actor;
use shared::models::{MovementKind, Sale, SaleCreate, SaleReceipt};
use uuid::Uuid;
use validator::Validate;

use super::{AlertEngine, ServiceError, ServiceResult};
use crate::db::DbService;
use crate::db::repository::{MovementInsert, MovementRepository, SaleRepository};

#[derive(Clone)]
pub struct SaleRecorder {
    db: DbService,
    alerts: AlertEngine,
}

impl SaleRecorder {
    pub fn new(db: DbService, alerts: AlertEngine) -> Self {
        Self { db, alerts }
    }

    /// Record a sale atomically: one Sale row, one inventory decrement and
    /// one StockMovement per call, all-or-nothing.
    pub async fn record_sale(&self, input: SaleCreate, actor: &Actor) -> ServiceResult<SaleReceipt> {
        input.validate()?;

        let unit_price = Decimal::from_f64(input.unit_price)
            .ok_or_else(|| ServiceError::Validation("unit_price is not a finite number".into()))?;
        let total_amount = round_money(Decimal::from(input.quantity) * unit_price);

        let now = Utc::now();
        let mut tx = self.db.pool.begin().await?;

        // Guarded decrement as the transaction's first statement: it takes
        // the write lock up front so concurrent sales serialize, and the
        // predicate makes overdraw impossible at any isolation level.
        let updated = sqlx::query(
            "UPDATE inventory SET quantity = quantity - ?1 \
             WHERE product_id = ?2 AND quantity >= ?1",
        )
        .bind(input.quantity)
        .bind(input.product_id)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            // Either no inventory row, or not enough stock. Nothing has been
            // written; dropping the transaction rolls it back.
            let available: Option<(i64,)> =
                sqlx::query_as("SELECT quantity FROM inventory WHERE product_id = ?")
                    .bind(input.product_id)
                    .fetch_optional(&mut *tx)
                    .await?;
            return match available {
                Some((quantity,)) => Err(ServiceError::InsufficientStock {
                    available: quantity,
                    requested: input.quantity,
                }),
                None => Err(ServiceError::NotFound(format!(
                    "inventory for product {}",
                    input.product_id
                ))),
            };
        }

        let (new_quantity, reorder_level): (i64, i64) =
            sqlx::query_as("SELECT quantity, reorder_level FROM inventory WHERE product_id = ?")
                .bind(input.product_id)
                .fetch_one(&mut *tx)
                .await?;

        let sale = Sale {
            id: Uuid::new_v4().to_string(),
            product_id: input.product_id,
            quantity: input.quantity,
            unit_price: input.unit_price,
            total_amount,
            cashier_id: actor.id,
            payment_method: input.payment_method,
            created_at: now,
        };
        SaleRepository::insert(&mut tx, &sale).await?;

        MovementRepository::insert(
            &mut tx,
            &MovementInsert {
                product_id: input.product_id,
                kind: MovementKind::Sale,
                delta: -input.quantity,
                previous_quantity: new_quantity + input.quantity,
                new_quantity,
                reason: Some(format!("sale {}", sale.id)),
                actor_id: actor.id,
                created_at: now,
            },
        )
        .await?;

        tx.commit().await?;

        tracing::info!(
            product_id = input.product_id,
            quantity = input.quantity,
            new_quantity,
            sale_id = %sale.id,
            "sale recorded"
        );

        // Post-commit, best-effort: an alert failure must not undo the sale
        let low_stock = new_quantity <= reorder_level;
        if low_stock
            && let Err(e) = self
                .alerts
                .evaluate_low_stock(input.product_id, new_quantity, reorder_level)
                .await
        {
            tracing::warn!(
                target: "alerts",
                error = %e,
                product_id = input.product_id,
                "post-sale alert evaluation failed"
            );
        }

        Ok(SaleReceipt {
            sale,
            new_quantity,
            low_stock_alert_raised: low_stock,
        })
    }
}

/// Round a monetary amount to 2 decimals and convert to the f64 storage type
fn round_money(amount: Decimal) -> f64 {
    amount.round_dp(2).to_f64().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_rounds_to_two_decimals() {
        // 3 x 6.666 = 19.998 -> 20.00
        let total = round_money(Decimal::from(3) * Decimal::new(6666, 3));
        assert_eq!(total, 20.0);
    }

    #[test]
    fn exact_totals_are_untouched() {
        let total = round_money(Decimal::from(4) * Decimal::new(250, 2));
        assert_eq!(total, 10.0);
    }
}
