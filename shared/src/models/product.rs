//! Product Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub supplier: Option<String>,
    pub cost_price: f64,
    pub sell_price: f64,
    /// Unique stock keeping unit
    pub sku: String,
    /// Optional image reference (path or URL, served elsewhere)
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create product payload
///
/// Creating a product also creates its one-to-one inventory record; a
/// non-zero `initial_quantity` is logged as an adjustment movement from 0.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductCreate {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub category: String,
    pub supplier: Option<String>,
    #[validate(range(min = 0.0))]
    pub cost_price: f64,
    #[validate(range(min = 0.0))]
    pub sell_price: f64,
    #[validate(length(min = 1))]
    pub sku: String,
    pub image: Option<String>,

    // Initial inventory settings
    #[validate(range(min = 0))]
    pub initial_quantity: Option<i64>,
    #[validate(range(min = 0))]
    pub reorder_level: Option<i64>,
    #[validate(range(min = 0))]
    pub max_stock_level: Option<i64>,
    pub location: Option<String>,
}

/// Update product payload (descriptive fields only; identity is immutable)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ProductUpdate {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub category: Option<String>,
    pub supplier: Option<String>,
    #[validate(range(min = 0.0))]
    pub cost_price: Option<f64>,
    #[validate(range(min = 0.0))]
    pub sell_price: Option<f64>,
    pub image: Option<String>,
}
