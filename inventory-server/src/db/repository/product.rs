//! Product Repository

use super::{BaseRepository, RepoError, RepoResult};
use chrono::{DateTime, Utc};
use shared::models::{Product, ProductCreate, ProductUpdate};
use sqlx::{SqliteConnection, SqlitePool};

const PRODUCT_COLUMNS: &str =
    "id, name, category, supplier, cost_price, sell_price, sku, image, created_at, updated_at";

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    /// Find all products ordered by name
    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY name"
        ))
        .fetch_all(self.base.pool())
        .await?;
        Ok(products)
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.base.pool())
        .await?;
        Ok(product)
    }

    pub async fn find_by_sku(&self, sku: &str) -> RepoResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE sku = ?"
        ))
        .bind(sku)
        .fetch_optional(self.base.pool())
        .await?;
        Ok(product)
    }

    /// Insert a product row inside a caller-owned transaction, returning its id
    pub async fn insert(
        conn: &mut SqliteConnection,
        data: &ProductCreate,
        now: DateTime<Utc>,
    ) -> RepoResult<i64> {
        let result = sqlx::query(
            "INSERT INTO products (name, category, supplier, cost_price, sell_price, sku, image, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&data.name)
        .bind(&data.category)
        .bind(data.supplier.as_deref())
        .bind(data.cost_price)
        .bind(data.sell_price)
        .bind(&data.sku)
        .bind(data.image.as_deref())
        .bind(now)
        .bind(now)
        .execute(conn)
        .await
        .map_err(|e| match RepoError::from(e) {
            RepoError::Duplicate(_) => {
                RepoError::Duplicate(format!("SKU '{}' already exists", data.sku))
            }
            other => other,
        })?;
        Ok(result.last_insert_rowid())
    }

    /// Update descriptive fields; identity (id, sku) is immutable
    pub async fn update(&self, id: i64, data: &ProductUpdate) -> RepoResult<Product> {
        // Build dynamic SET clauses, binding only the provided fields
        let mut sets: Vec<&str> = Vec::new();
        if data.name.is_some() {
            sets.push("name = ?");
        }
        if data.category.is_some() {
            sets.push("category = ?");
        }
        if data.supplier.is_some() {
            sets.push("supplier = ?");
        }
        if data.cost_price.is_some() {
            sets.push("cost_price = ?");
        }
        if data.sell_price.is_some() {
            sets.push("sell_price = ?");
        }
        if data.image.is_some() {
            sets.push("image = ?");
        }

        if sets.is_empty() {
            // No fields to update
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)));
        }
        sets.push("updated_at = ?");

        let sql = format!("UPDATE products SET {} WHERE id = ?", sets.join(", "));
        let mut query = sqlx::query(&sql);
        if let Some(v) = &data.name {
            query = query.bind(v);
        }
        if let Some(v) = &data.category {
            query = query.bind(v);
        }
        if let Some(v) = &data.supplier {
            query = query.bind(v);
        }
        if let Some(v) = data.cost_price {
            query = query.bind(v);
        }
        if let Some(v) = data.sell_price {
            query = query.bind(v);
        }
        if let Some(v) = &data.image {
            query = query.bind(v);
        }
        query = query.bind(Utc::now()).bind(id);

        let result = query.execute(self.base.pool()).await?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Product {} not found", id)));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }

    /// Hard delete a product (its inventory row cascades)
    ///
    /// Products with recorded sales or movements are protected by foreign
    /// keys; the violation surfaces as a conflict.
    pub async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(self.base.pool())
            .await
            .map_err(|e| match RepoError::from(e) {
                RepoError::Conflict(_) => RepoError::Conflict(format!(
                    "Product {} has recorded history and cannot be deleted",
                    id
                )),
                other => other,
            })?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Product {} not found", id)));
        }
        Ok(())
    }
}
