//! Service-level error types

use crate::db::repository::RepoError;
use thiserror::Error;

/// Errors surfaced by the domain services (sale recorder, alert engine,
/// stock service)
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    /// Requested quantity exceeds what is available; carries both numbers
    /// for client display
    #[error("insufficient stock: available {available}, requested {requested}")]
    InsufficientStock { available: i64, requested: i64 },

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepoError> for ServiceError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound(msg) => ServiceError::NotFound(msg),
            RepoError::Duplicate(msg) | RepoError::Conflict(msg) => ServiceError::Conflict(msg),
            RepoError::Validation(msg) => ServiceError::Validation(msg),
            RepoError::Database(msg) => ServiceError::Database(msg),
        }
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        RepoError::from(e).into()
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(e: validator::ValidationErrors) -> Self {
        ServiceError::Validation(e.to_string())
    }
}
