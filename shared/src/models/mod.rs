//! Data models
//!
//! Shared between inventory-server and frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! Catalog IDs are `i64` (SQLite INTEGER PRIMARY KEY); sale IDs are UUID strings.

pub mod alert;
pub mod inventory;
pub mod product;
pub mod report;
pub mod sale;

// Re-exports
pub use alert::*;
pub use inventory::*;
pub use product::*;
pub use report::*;
pub use sale::*;
