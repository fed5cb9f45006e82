//! Repository Module
//!
//! Per-entity CRUD and query operations over the SQLite pool. Multi-row
//! writes that must be atomic (sale recording, restocks, adjustments) run in
//! transactions owned by the service layer; the `insert` helpers here take a
//! `&mut SqliteConnection` so they can participate in those transactions.

pub mod alert;
pub mod inventory;
pub mod movement;
pub mod product;
pub mod report;
pub mod sale;

// Re-exports
pub use alert::AlertRepository;
pub use inventory::InventoryRepository;
pub use movement::{MovementInsert, MovementRepository};
pub use product::ProductRepository;
pub use report::ReportRepository;
pub use sale::SaleRepository;

use sqlx::SqlitePool;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepoError::NotFound(err.to_string()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                RepoError::Duplicate(db_err.to_string())
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                RepoError::Conflict(db_err.to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with pool reference
#[derive(Clone)]
pub struct BaseRepository {
    pool: SqlitePool,
}

impl BaseRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
