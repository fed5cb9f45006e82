//! API routing modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`products`] - product catalog management
//! - [`inventory`] - stock levels, restock/adjust, movement history
//! - [`sales`] - sale recording and history
//! - [`alerts`] - stock alert listing and lifecycle
//! - [`reports`] - analytics aggregation

pub mod alerts;
pub mod health;
pub mod inventory;
pub mod products;
pub mod reports;
pub mod sales;

use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

/// Build the application router with all API modules and middleware layers
pub fn build_router(state: ServerState) -> Router {
    let request_timeout = Duration::from_millis(state.config.request_timeout_ms);
    Router::new()
        .merge(health::router())
        .merge(products::router())
        .merge(inventory::router())
        .merge(sales::router())
        .merge(alerts::router())
        .merge(reports::router())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
