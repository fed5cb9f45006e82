//! Alerts API module

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/alerts", alert_routes())
}

fn alert_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/resolve", post(handler::resolve))
        .route("/{id}/dismiss", post(handler::dismiss))
}
