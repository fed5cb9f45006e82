use thiserror::Error;

/// Startup/runtime errors for the server itself (API errors are
/// `utils::AppError`)
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for server lifecycle code
pub type Result<T> = std::result::Result<T, ServerError>;
