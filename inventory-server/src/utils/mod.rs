//! Utility module - error types and logging

pub mod error;
pub mod logger;

pub use error::{AppError, AppResponse, AppResult};
pub use error::ok_with_message;
