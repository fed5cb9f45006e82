//! Alert Engine
//!
//! Derives advisory stock notifications from inventory state. Alerts are
//! best-effort: raising them happens after the owning transaction has
//! committed, and a failure here never fails the operation that triggered
//! the evaluation. Dedup of active alerts is backed by a partial unique
//! index, so the benign check-then-insert race collapses into an ignored
//! conflict. Restocks never auto-resolve an alert; only explicit user
//! action does.

use chrono::Utc;
use shared::Actor;
use shared::models::{AlertPriority, AlertType};

use super::{ServiceError, ServiceResult};
use crate::db::DbService;
use crate::db::repository::{AlertRepository, ProductRepository};

#[derive(Clone)]
pub struct AlertEngine {
    db: DbService,
}

impl AlertEngine {
    pub fn new(db: DbService) -> Self {
        Self { db }
    }

    fn alerts(&self) -> AlertRepository {
        AlertRepository::new(self.db.pool.clone())
    }

    /// Evaluate-and-raise for a low/out-of-stock condition
    ///
    /// Idempotent: any active low_stock or out_of_stock alert for the
    /// product suppresses a new one. Returns whether an alert was inserted.
    pub async fn evaluate_low_stock(
        &self,
        product_id: i64,
        current_quantity: i64,
        reorder_level: i64,
    ) -> ServiceResult<bool> {
        let repo = self.alerts();
        if repo.find_active_stock_alert(product_id).await?.is_some() {
            return Ok(false);
        }

        let name = self.product_name(product_id).await?;
        let (alert_type, priority) = classify_stock_level(current_quantity);
        let message = stock_alert_message(&name, current_quantity, reorder_level);

        let inserted = repo
            .insert_if_absent(product_id, alert_type, priority, &message, Utc::now())
            .await?;
        if inserted {
            tracing::info!(
                target: "alerts",
                product_id,
                alert_type = alert_type.as_str(),
                "stock alert raised"
            );
        }
        Ok(inserted)
    }

    /// Raise an overstock alert when a restock pushes quantity to or above
    /// the maximum stock level
    pub async fn evaluate_overstock(
        &self,
        product_id: i64,
        current_quantity: i64,
        max_stock_level: i64,
    ) -> ServiceResult<bool> {
        if current_quantity < max_stock_level {
            return Ok(false);
        }

        let name = self.product_name(product_id).await?;
        let message = format!(
            "{name} is overstocked: {current_quantity} on hand (maximum {max_stock_level})"
        );
        let inserted = self
            .alerts()
            .insert_if_absent(
                product_id,
                AlertType::Overstock,
                AlertPriority::Medium,
                &message,
                Utc::now(),
            )
            .await?;
        if inserted {
            tracing::info!(target: "alerts", product_id, "overstock alert raised");
        }
        Ok(inserted)
    }

    /// Advisory note when an administrative update changes the sell price
    pub async fn note_price_change(
        &self,
        product_id: i64,
        old_price: f64,
        new_price: f64,
    ) -> ServiceResult<bool> {
        let name = self.product_name(product_id).await?;
        let message =
            format!("{name} sell price changed from {old_price:.2} to {new_price:.2}");
        self.alerts()
            .insert_if_absent(
                product_id,
                AlertType::PriceChange,
                AlertPriority::Low,
                &message,
                Utc::now(),
            )
            .await
            .map_err(Into::into)
    }

    /// Resolve an active alert, stamping resolver and timestamp
    pub async fn resolve(
        &self,
        alert_id: i64,
        actor: &Actor,
        reason: Option<&str>,
    ) -> ServiceResult<()> {
        let resolved = self.alerts().resolve(alert_id, actor.id, Utc::now()).await?;
        if !resolved {
            return Err(ServiceError::NotFound(format!("active alert {alert_id}")));
        }
        tracing::info!(
            target: "alerts",
            alert_id,
            actor_id = actor.id,
            reason = reason.unwrap_or(""),
            "alert resolved"
        );
        Ok(())
    }

    /// Dismiss an active alert
    pub async fn dismiss(&self, alert_id: i64, actor: &Actor) -> ServiceResult<()> {
        let dismissed = self.alerts().dismiss(alert_id, actor.id, Utc::now()).await?;
        if !dismissed {
            return Err(ServiceError::NotFound(format!("active alert {alert_id}")));
        }
        tracing::info!(target: "alerts", alert_id, actor_id = actor.id, "alert dismissed");
        Ok(())
    }

    async fn product_name(&self, product_id: i64) -> ServiceResult<String> {
        ProductRepository::new(self.db.pool.clone())
            .find_by_id(product_id)
            .await?
            .map(|p| p.name)
            .ok_or_else(|| ServiceError::NotFound(format!("product {product_id}")))
    }
}

/// Classify a stock level into alert type and priority
fn classify_stock_level(quantity: i64) -> (AlertType, AlertPriority) {
    if quantity == 0 {
        (AlertType::OutOfStock, AlertPriority::Critical)
    } else {
        (AlertType::LowStock, AlertPriority::High)
    }
}

fn stock_alert_message(name: &str, quantity: i64, reorder_level: i64) -> String {
    if quantity == 0 {
        format!("{name} is out of stock")
    } else {
        format!("{name} is low on stock: {quantity} left (reorder at {reorder_level})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_quantity_is_critical_out_of_stock() {
        assert_eq!(
            classify_stock_level(0),
            (AlertType::OutOfStock, AlertPriority::Critical)
        );
    }

    #[test]
    fn nonzero_quantity_is_high_low_stock() {
        assert_eq!(
            classify_stock_level(3),
            (AlertType::LowStock, AlertPriority::High)
        );
    }

    #[test]
    fn message_embeds_name_quantity_and_threshold() {
        let msg = stock_alert_message("Cola 330ml", 2, 15);
        assert!(msg.contains("Cola 330ml"));
        assert!(msg.contains('2'));
        assert!(msg.contains("15"));
        assert_eq!(stock_alert_message("Cola 330ml", 0, 15), "Cola 330ml is out of stock");
    }
}
