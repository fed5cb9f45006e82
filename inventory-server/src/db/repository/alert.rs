//! Alert Repository

use super::{BaseRepository, RepoResult};
use chrono::{DateTime, Utc};
use shared::models::{Alert, AlertPriority, AlertStatus, AlertType};
use sqlx::SqlitePool;

const ALERT_COLUMNS: &str =
    "id, product_id, alert_type, message, status, priority, created_at, resolved_at, resolved_by";

#[derive(Clone)]
pub struct AlertRepository {
    base: BaseRepository,
}

impl AlertRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    /// All alerts, optionally filtered by status, newest first
    pub async fn find_all(&self, status: Option<AlertStatus>) -> RepoResult<Vec<Alert>> {
        let alerts = sqlx::query_as::<_, Alert>(&format!(
            "SELECT {ALERT_COLUMNS} FROM alerts \
             WHERE (?1 IS NULL OR status = ?1) ORDER BY created_at DESC, id DESC"
        ))
        .bind(status)
        .fetch_all(self.base.pool())
        .await?;
        Ok(alerts)
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Alert>> {
        let alert =
            sqlx::query_as::<_, Alert>(&format!("SELECT {ALERT_COLUMNS} FROM alerts WHERE id = ?"))
                .bind(id)
                .fetch_optional(self.base.pool())
                .await?;
        Ok(alert)
    }

    /// Active low-stock or out-of-stock alert for a product, if any
    pub async fn find_active_stock_alert(&self, product_id: i64) -> RepoResult<Option<Alert>> {
        let alert = sqlx::query_as::<_, Alert>(&format!(
            "SELECT {ALERT_COLUMNS} FROM alerts \
             WHERE product_id = ? AND alert_type IN ('low_stock', 'out_of_stock') AND status = 'active'"
        ))
        .bind(product_id)
        .fetch_optional(self.base.pool())
        .await?;
        Ok(alert)
    }

    /// Insert an alert unless an active one of the same (product, type) exists
    ///
    /// The partial unique index on (product_id, alert_type) WHERE
    /// status='active' turns the concurrent check-then-insert race into an
    /// ignored conflict. Returns whether a row was inserted.
    pub async fn insert_if_absent(
        &self,
        product_id: i64,
        alert_type: AlertType,
        priority: AlertPriority,
        message: &str,
        now: DateTime<Utc>,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            "INSERT INTO alerts (product_id, alert_type, message, status, priority, created_at) \
             VALUES (?, ?, ?, 'active', ?, ?) \
             ON CONFLICT DO NOTHING",
        )
        .bind(product_id)
        .bind(alert_type)
        .bind(message)
        .bind(priority)
        .bind(now)
        .execute(self.base.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Transition an active alert to resolved; returns false if no active
    /// alert with this id exists
    pub async fn resolve(&self, id: i64, resolved_by: i64, now: DateTime<Utc>) -> RepoResult<bool> {
        let result = sqlx::query(
            "UPDATE alerts SET status = 'resolved', resolved_at = ?, resolved_by = ? \
             WHERE id = ? AND status = 'active'",
        )
        .bind(now)
        .bind(resolved_by)
        .bind(id)
        .execute(self.base.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Transition an active alert to dismissed; returns false if no active
    /// alert with this id exists
    pub async fn dismiss(&self, id: i64, dismissed_by: i64, now: DateTime<Utc>) -> RepoResult<bool> {
        let result = sqlx::query(
            "UPDATE alerts SET status = 'dismissed', resolved_at = ?, resolved_by = ? \
             WHERE id = ? AND status = 'active'",
        )
        .bind(now)
        .bind(dismissed_by)
        .bind(id)
        .execute(self.base.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
