//! Actor Identity
//!
//! The authenticated identity performing a mutating operation. Supplied by
//! the upstream authentication layer; the server only uses it for audit
//! attribution and never checks `role` itself.

use serde::{Deserialize, Serialize};

/// Authenticated actor `{id, role}` attached to mutating requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: i64,
    pub role: String,
}

impl Actor {
    pub fn new(id: i64, role: impl Into<String>) -> Self {
        Self {
            id,
            role: role.into(),
        }
    }
}
