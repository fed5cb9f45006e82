//! Inventory Model (stock levels + movement audit trail)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Inventory record, one-to-one with a product
///
/// `quantity >= 0` at all times; a sale that would violate this is rejected
/// entirely. Quantity is only ever written through the sale recorder or the
/// administrative stock service, both of which pair the write with a
/// [`StockMovement`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct InventoryRecord {
    pub product_id: i64,
    pub quantity: i64,
    /// Threshold at or below which low-stock status applies
    pub reorder_level: i64,
    /// Threshold at or above which overstock status applies
    pub max_stock_level: i64,
    pub location: Option<String>,
    pub last_restocked_at: Option<DateTime<Utc>>,
}

/// Inventory record joined with its product (list views)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct InventoryLevel {
    pub product_id: i64,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub quantity: i64,
    pub reorder_level: i64,
    pub max_stock_level: i64,
    pub location: Option<String>,
    pub last_restocked_at: Option<DateTime<Utc>>,
}

/// Update payload for inventory thresholds/metadata
///
/// Quantity is deliberately absent; use restock/adjust so the change is
/// paired with a movement record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct InventoryLevelsUpdate {
    #[validate(range(min = 0))]
    pub reorder_level: Option<i64>,
    #[validate(range(min = 0))]
    pub max_stock_level: Option<i64>,
    pub location: Option<String>,
}

/// Restock payload (adds to the current quantity)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RestockRequest {
    #[validate(range(min = 1))]
    pub quantity: i64,
    pub reason: Option<String>,
}

/// Adjustment payload (sets the absolute quantity)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AdjustRequest {
    #[validate(range(min = 0))]
    pub new_quantity: i64,
    /// `adjustment` (default), `return` or `damage`
    pub kind: Option<MovementKind>,
    #[validate(length(min = 1))]
    pub reason: String,
}

/// Why an inventory quantity changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "snake_case"))]
pub enum MovementKind {
    Sale,
    Restock,
    Adjustment,
    Return,
    Damage,
}

impl MovementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Sale => "sale",
            MovementKind::Restock => "restock",
            MovementKind::Adjustment => "adjustment",
            MovementKind::Return => "return",
            MovementKind::Damage => "damage",
        }
    }
}

/// Immutable audit entry for a quantity change
///
/// Append-only; `new_quantity = previous_quantity + delta` is enforced by a
/// CHECK constraint. This is the system-of-record for "why did inventory
/// change".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct StockMovement {
    pub id: i64,
    pub product_id: i64,
    pub kind: MovementKind,
    /// Signed quantity delta (negative for sales/damage)
    pub delta: i64,
    pub previous_quantity: i64,
    pub new_quantity: i64,
    pub reason: Option<String>,
    /// Actor attribution (audit)
    pub actor_id: i64,
    pub created_at: DateTime<Utc>,
}
