//! Stock Movement Repository (append-only audit ledger)

use super::{BaseRepository, RepoResult};
use chrono::{DateTime, Utc};
use shared::models::{MovementKind, StockMovement};
use sqlx::{SqliteConnection, SqlitePool};

const MOVEMENT_COLUMNS: &str =
    "id, product_id, kind, delta, previous_quantity, new_quantity, reason, actor_id, created_at";

/// Insert payload for a movement row
///
/// `new_quantity = previous_quantity + delta` is enforced by a CHECK
/// constraint; callers compute all three from the same transactional read.
#[derive(Debug, Clone)]
pub struct MovementInsert {
    pub product_id: i64,
    pub kind: MovementKind,
    pub delta: i64,
    pub previous_quantity: i64,
    pub new_quantity: i64,
    pub reason: Option<String>,
    pub actor_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct MovementRepository {
    base: BaseRepository,
}

impl MovementRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    /// Append a movement inside a caller-owned transaction
    ///
    /// Movements are never updated or deleted once written.
    pub async fn insert(conn: &mut SqliteConnection, m: &MovementInsert) -> RepoResult<i64> {
        let result = sqlx::query(
            "INSERT INTO stock_movements (product_id, kind, delta, previous_quantity, new_quantity, reason, actor_id, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(m.product_id)
        .bind(m.kind)
        .bind(m.delta)
        .bind(m.previous_quantity)
        .bind(m.new_quantity)
        .bind(m.reason.as_deref())
        .bind(m.actor_id)
        .bind(m.created_at)
        .execute(conn)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Movement history for a product, newest first
    pub async fn find_by_product(
        &self,
        product_id: i64,
        limit: i64,
    ) -> RepoResult<Vec<StockMovement>> {
        let movements = sqlx::query_as::<_, StockMovement>(&format!(
            "SELECT {MOVEMENT_COLUMNS} FROM stock_movements \
             WHERE product_id = ? ORDER BY created_at DESC, id DESC LIMIT ?"
        ))
        .bind(product_id)
        .bind(limit)
        .fetch_all(self.base.pool())
        .await?;
        Ok(movements)
    }

    /// Most recent movements across all products, newest first
    pub async fn find_recent(&self, limit: i64) -> RepoResult<Vec<StockMovement>> {
        let movements = sqlx::query_as::<_, StockMovement>(&format!(
            "SELECT {MOVEMENT_COLUMNS} FROM stock_movements ORDER BY created_at DESC, id DESC LIMIT ?"
        ))
        .bind(limit)
        .fetch_all(self.base.pool())
        .await?;
        Ok(movements)
    }
}
