//! Reports API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reports", report_routes())
}

fn report_routes() -> Router<ServerState> {
    Router::new()
        .route("/sales-summary", get(handler::sales_summary))
        .route("/inventory-valuation", get(handler::inventory_valuation))
}
