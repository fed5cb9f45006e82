//! Inventory Repository (stock levels)
//!
//! Quantity is never written through this repository: sales go through the
//! sale recorder and administrative changes through the stock service, both
//! of which pair the write with a stock movement inside one transaction.

use super::{BaseRepository, RepoError, RepoResult};
use shared::models::{InventoryLevel, InventoryLevelsUpdate, InventoryRecord};
use sqlx::{SqliteConnection, SqlitePool};

const RECORD_COLUMNS: &str =
    "product_id, quantity, reorder_level, max_stock_level, location, last_restocked_at";

const LEVEL_SELECT: &str = "SELECT i.product_id, p.name, p.sku, p.category, i.quantity, \
     i.reorder_level, i.max_stock_level, i.location, i.last_restocked_at \
     FROM inventory i JOIN products p ON p.id = i.product_id";

#[derive(Clone)]
pub struct InventoryRepository {
    base: BaseRepository,
}

impl InventoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    /// All inventory rows joined with their product
    pub async fn find_all(&self) -> RepoResult<Vec<InventoryLevel>> {
        let levels = sqlx::query_as::<_, InventoryLevel>(&format!("{LEVEL_SELECT} ORDER BY p.name"))
            .fetch_all(self.base.pool())
            .await?;
        Ok(levels)
    }

    pub async fn find_by_product(&self, product_id: i64) -> RepoResult<Option<InventoryRecord>> {
        let record = sqlx::query_as::<_, InventoryRecord>(&format!(
            "SELECT {RECORD_COLUMNS} FROM inventory WHERE product_id = ?"
        ))
        .bind(product_id)
        .fetch_optional(self.base.pool())
        .await?;
        Ok(record)
    }

    /// Products at or below their reorder level
    pub async fn find_low_stock(&self) -> RepoResult<Vec<InventoryLevel>> {
        let levels = sqlx::query_as::<_, InventoryLevel>(&format!(
            "{LEVEL_SELECT} WHERE i.quantity <= i.reorder_level ORDER BY i.quantity"
        ))
        .fetch_all(self.base.pool())
        .await?;
        Ok(levels)
    }

    /// Insert the one-to-one inventory row inside a caller-owned transaction
    pub async fn insert(
        conn: &mut SqliteConnection,
        product_id: i64,
        quantity: i64,
        reorder_level: i64,
        max_stock_level: i64,
        location: Option<&str>,
    ) -> RepoResult<()> {
        sqlx::query(
            "INSERT INTO inventory (product_id, quantity, reorder_level, max_stock_level, location) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(product_id)
        .bind(quantity)
        .bind(reorder_level)
        .bind(max_stock_level)
        .bind(location)
        .execute(conn)
        .await?;
        Ok(())
    }

    /// Update thresholds/metadata (never quantity)
    pub async fn update_levels(
        &self,
        product_id: i64,
        data: &InventoryLevelsUpdate,
    ) -> RepoResult<InventoryRecord> {
        let mut sets: Vec<&str> = Vec::new();
        if data.reorder_level.is_some() {
            sets.push("reorder_level = ?");
        }
        if data.max_stock_level.is_some() {
            sets.push("max_stock_level = ?");
        }
        if data.location.is_some() {
            sets.push("location = ?");
        }

        if !sets.is_empty() {
            let sql = format!(
                "UPDATE inventory SET {} WHERE product_id = ?",
                sets.join(", ")
            );
            let mut query = sqlx::query(&sql);
            if let Some(v) = data.reorder_level {
                query = query.bind(v);
            }
            if let Some(v) = data.max_stock_level {
                query = query.bind(v);
            }
            if let Some(v) = &data.location {
                query = query.bind(v);
            }
            let result = query.bind(product_id).execute(self.base.pool()).await?;
            if result.rows_affected() == 0 {
                return Err(RepoError::NotFound(format!(
                    "Inventory for product {} not found",
                    product_id
                )));
            }
        }

        self.find_by_product(product_id).await?.ok_or_else(|| {
            RepoError::NotFound(format!("Inventory for product {} not found", product_id))
        })
    }
}
