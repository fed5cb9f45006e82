//! Sale Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payment method used at the till
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "snake_case"))]
pub enum PaymentMethod {
    Cash,
    Card,
    Mobile,
    Other,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Mobile => "mobile",
            PaymentMethod::Other => "other",
        }
    }
}

/// Immutable sale transaction record
///
/// Created exactly once per successful `record_sale`; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Sale {
    /// UUID v4
    pub id: String,
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: f64,
    /// quantity * unit_price, rounded to 2 decimals
    pub total_amount: f64,
    pub cashier_id: i64,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
}

/// Record sale payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SaleCreate {
    pub product_id: i64,
    #[validate(range(min = 1))]
    pub quantity: i64,
    #[validate(range(min = 0.0))]
    pub unit_price: f64,
    pub payment_method: PaymentMethod,
}

/// Result of a successful sale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleReceipt {
    pub sale: Sale,
    pub new_quantity: i64,
    /// Whether the sale left the product at or below its reorder level
    pub low_stock_alert_raised: bool,
}
