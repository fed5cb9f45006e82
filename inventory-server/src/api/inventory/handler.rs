//! Inventory API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{
    AdjustRequest, InventoryLevel, InventoryLevelsUpdate, InventoryRecord, RestockRequest,
    StockMovement,
};
use validator::Validate;

use crate::core::ServerState;
use crate::db::repository::{InventoryRepository, MovementRepository};
use crate::identity::CurrentActor;
use crate::utils::{AppError, AppResult};

const DEFAULT_MOVEMENT_LIMIT: i64 = 100;

/// GET /api/inventory - all stock levels joined with product data
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<InventoryLevel>>> {
    let repo = InventoryRepository::new(state.db.pool.clone());
    let levels = repo.find_all().await?;
    Ok(Json(levels))
}

/// GET /api/inventory/low-stock - products at or below their reorder level
pub async fn low_stock(State(state): State<ServerState>) -> AppResult<Json<Vec<InventoryLevel>>> {
    let repo = InventoryRepository::new(state.db.pool.clone());
    let levels = repo.find_low_stock().await?;
    Ok(Json(levels))
}

/// GET /api/inventory/{product_id}
pub async fn get_by_product(
    State(state): State<ServerState>,
    Path(product_id): Path<i64>,
) -> AppResult<Json<InventoryRecord>> {
    let repo = InventoryRepository::new(state.db.pool.clone());
    let record = repo
        .find_by_product(product_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Inventory for product {}", product_id)))?;
    Ok(Json(record))
}

/// PUT /api/inventory/{product_id} - update thresholds/location (not quantity)
pub async fn update_levels(
    State(state): State<ServerState>,
    Path(product_id): Path<i64>,
    _actor: CurrentActor,
    Json(payload): Json<InventoryLevelsUpdate>,
) -> AppResult<Json<InventoryRecord>> {
    payload.validate().map_err(AppError::from)?;
    let repo = InventoryRepository::new(state.db.pool.clone());
    let record = repo.update_levels(product_id, &payload).await?;
    Ok(Json(record))
}

/// POST /api/inventory/{product_id}/restock
pub async fn restock(
    State(state): State<ServerState>,
    Path(product_id): Path<i64>,
    actor: CurrentActor,
    Json(payload): Json<RestockRequest>,
) -> AppResult<Json<InventoryRecord>> {
    let record = state.stock.restock(product_id, payload, &actor.0).await?;
    Ok(Json(record))
}

/// POST /api/inventory/{product_id}/adjust
pub async fn adjust(
    State(state): State<ServerState>,
    Path(product_id): Path<i64>,
    actor: CurrentActor,
    Json(payload): Json<AdjustRequest>,
) -> AppResult<Json<InventoryRecord>> {
    let record = state.stock.adjust(product_id, payload, &actor.0).await?;
    Ok(Json(record))
}

#[derive(Debug, Deserialize)]
pub struct MovementsQuery {
    pub limit: Option<i64>,
}

/// GET /api/inventory/movements - most recent movements across all products
pub async fn recent_movements(
    State(state): State<ServerState>,
    Query(query): Query<MovementsQuery>,
) -> AppResult<Json<Vec<StockMovement>>> {
    let repo = MovementRepository::new(state.db.pool.clone());
    let limit = query.limit.unwrap_or(DEFAULT_MOVEMENT_LIMIT).clamp(1, 1000);
    let movements = repo.find_recent(limit).await?;
    Ok(Json(movements))
}

/// GET /api/inventory/{product_id}/movements - audit trail, newest first
pub async fn movements(
    State(state): State<ServerState>,
    Path(product_id): Path<i64>,
    Query(query): Query<MovementsQuery>,
) -> AppResult<Json<Vec<StockMovement>>> {
    let repo = MovementRepository::new(state.db.pool.clone());
    let limit = query.limit.unwrap_or(DEFAULT_MOVEMENT_LIMIT).clamp(1, 1000);
    let movements = repo.find_by_product(product_id, limit).await?;
    Ok(Json(movements))
}
