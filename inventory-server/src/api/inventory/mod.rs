//! Inventory API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/inventory", inventory_routes())
}

fn inventory_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/low-stock", get(handler::low_stock))
        .route("/movements", get(handler::recent_movements))
        .route(
            "/{product_id}",
            get(handler::get_by_product).put(handler::update_levels),
        )
        .route("/{product_id}/restock", post(handler::restock))
        .route("/{product_id}/adjust", post(handler::adjust))
        .route("/{product_id}/movements", get(handler::movements))
}
