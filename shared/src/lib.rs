//! Shared types for Shelfstock
//!
//! Domain models and request/response payloads used by the inventory server
//! and its API clients. DB row types derive `sqlx::FromRow` behind the `db`
//! feature so frontends can depend on this crate without pulling in sqlx.

pub mod actor;
pub mod models;

// Re-exports
pub use actor::Actor;
pub use serde::{Deserialize, Serialize};
