//! Alert Model (advisory stock notifications)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What condition the alert reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "snake_case"))]
pub enum AlertType {
    LowStock,
    OutOfStock,
    Overstock,
    PriceChange,
}

impl AlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::LowStock => "low_stock",
            AlertType::OutOfStock => "out_of_stock",
            AlertType::Overstock => "overstock",
            AlertType::PriceChange => "price_change",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "snake_case"))]
pub enum AlertStatus {
    Active,
    Resolved,
    Dismissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "snake_case"))]
pub enum AlertPriority {
    Low,
    Medium,
    High,
    Critical,
}

/// Derived advisory entity
///
/// Created by the alert engine when a triggering condition is observed and
/// no active alert of the same (product, type) pair exists. Only explicit
/// user action resolves or dismisses an alert; restocks never auto-resolve.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Alert {
    pub id: i64,
    pub product_id: i64,
    pub alert_type: AlertType,
    pub message: String,
    pub status: AlertStatus,
    pub priority: AlertPriority,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub resolved_by: Option<i64>,
}

/// Resolve/dismiss payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertResolveRequest {
    pub reason: Option<String>,
}
