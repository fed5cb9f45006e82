//! Sale Repository

use super::{BaseRepository, RepoResult};
use chrono::{DateTime, Utc};
use shared::models::Sale;
use sqlx::{SqliteConnection, SqlitePool};

const SALE_COLUMNS: &str =
    "id, product_id, quantity, unit_price, total_amount, cashier_id, payment_method, created_at";

#[derive(Clone)]
pub struct SaleRepository {
    base: BaseRepository,
}

impl SaleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    /// Insert a sale row inside a caller-owned transaction
    pub async fn insert(conn: &mut SqliteConnection, sale: &Sale) -> RepoResult<()> {
        sqlx::query(
            "INSERT INTO sales (id, product_id, quantity, unit_price, total_amount, cashier_id, payment_method, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&sale.id)
        .bind(sale.product_id)
        .bind(sale.quantity)
        .bind(sale.unit_price)
        .bind(sale.total_amount)
        .bind(sale.cashier_id)
        .bind(sale.payment_method)
        .bind(sale.created_at)
        .execute(conn)
        .await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Sale>> {
        let sale =
            sqlx::query_as::<_, Sale>(&format!("SELECT {SALE_COLUMNS} FROM sales WHERE id = ?"))
                .bind(id)
                .fetch_optional(self.base.pool())
                .await?;
        Ok(sale)
    }

    /// Sales within an optional date range, newest first
    pub async fn find_all(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
        limit: i64,
    ) -> RepoResult<Vec<Sale>> {
        let sales = sqlx::query_as::<_, Sale>(&format!(
            "SELECT {SALE_COLUMNS} FROM sales \
             WHERE (?1 IS NULL OR created_at >= ?1) AND (?2 IS NULL OR created_at <= ?2) \
             ORDER BY created_at DESC LIMIT ?3"
        ))
        .bind(from)
        .bind(to)
        .bind(limit)
        .fetch_all(self.base.pool())
        .await?;
        Ok(sales)
    }
}
