//! Report Models (analytics aggregation results)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sales totals over a date range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesSummary {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub sale_count: i64,
    pub units_sold: i64,
    pub gross_revenue: f64,
    pub payment_breakdown: Vec<PaymentBreakdown>,
    pub top_products: Vec<TopProduct>,
}

/// Per-payment-method breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PaymentBreakdown {
    pub method: String,
    pub amount: f64,
    pub count: i64,
}

/// Best sellers within the range
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct TopProduct {
    pub product_id: i64,
    pub name: String,
    pub units_sold: i64,
    pub revenue: f64,
}

/// Stock valuation per product
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ProductValuation {
    pub product_id: i64,
    pub name: String,
    pub sku: String,
    pub quantity: i64,
    pub cost_value: f64,
    pub retail_value: f64,
}

/// Whole-inventory valuation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryValuation {
    pub total_cost_value: f64,
    pub total_retail_value: f64,
    pub products: Vec<ProductValuation>,
}
