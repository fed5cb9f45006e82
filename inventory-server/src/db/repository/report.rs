//! Report Repository (analytics aggregation)

use super::{BaseRepository, RepoResult};
use chrono::{DateTime, Utc};
use shared::models::{
    InventoryValuation, PaymentBreakdown, ProductValuation, SalesSummary, TopProduct,
};
use sqlx::SqlitePool;

const TOP_PRODUCT_LIMIT: i64 = 5;

#[derive(Clone)]
pub struct ReportRepository {
    base: BaseRepository,
}

impl ReportRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    /// Aggregate sales over an optional date range: totals, payment-method
    /// breakdown and best sellers
    pub async fn sales_summary(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> RepoResult<SalesSummary> {
        let (sale_count, units_sold, gross_revenue): (i64, i64, f64) = sqlx::query_as(
            "SELECT COUNT(*), COALESCE(SUM(quantity), 0), COALESCE(SUM(total_amount), 0.0) \
             FROM sales \
             WHERE (?1 IS NULL OR created_at >= ?1) AND (?2 IS NULL OR created_at <= ?2)",
        )
        .bind(from)
        .bind(to)
        .fetch_one(self.base.pool())
        .await?;

        let payment_breakdown = sqlx::query_as::<_, PaymentBreakdown>(
            "SELECT payment_method AS method, COALESCE(SUM(total_amount), 0.0) AS amount, COUNT(*) AS count \
             FROM sales \
             WHERE (?1 IS NULL OR created_at >= ?1) AND (?2 IS NULL OR created_at <= ?2) \
             GROUP BY payment_method ORDER BY amount DESC",
        )
        .bind(from)
        .bind(to)
        .fetch_all(self.base.pool())
        .await?;

        let top_products = sqlx::query_as::<_, TopProduct>(
            "SELECT s.product_id, p.name, SUM(s.quantity) AS units_sold, SUM(s.total_amount) AS revenue \
             FROM sales s JOIN products p ON p.id = s.product_id \
             WHERE (?1 IS NULL OR s.created_at >= ?1) AND (?2 IS NULL OR s.created_at <= ?2) \
             GROUP BY s.product_id, p.name ORDER BY units_sold DESC LIMIT ?3",
        )
        .bind(from)
        .bind(to)
        .bind(TOP_PRODUCT_LIMIT)
        .fetch_all(self.base.pool())
        .await?;

        Ok(SalesSummary {
            from,
            to,
            sale_count,
            units_sold,
            gross_revenue,
            payment_breakdown,
            top_products,
        })
    }

    /// Per-product and total stock valuation at cost and retail prices
    pub async fn inventory_valuation(&self) -> RepoResult<InventoryValuation> {
        let products = sqlx::query_as::<_, ProductValuation>(
            "SELECT i.product_id, p.name, p.sku, i.quantity, \
             i.quantity * p.cost_price AS cost_value, \
             i.quantity * p.sell_price AS retail_value \
             FROM inventory i JOIN products p ON p.id = i.product_id \
             ORDER BY cost_value DESC",
        )
        .fetch_all(self.base.pool())
        .await?;

        let total_cost_value = products.iter().map(|p| p.cost_value).sum();
        let total_retail_value = products.iter().map(|p| p.retail_value).sum();

        Ok(InventoryValuation {
            total_cost_value,
            total_retail_value,
            products,
        })
    }
}
