//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use shared::models::{Product, ProductCreate, ProductUpdate};

use crate::core::ServerState;
use crate::db::repository::ProductRepository;
use crate::identity::CurrentActor;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    pub sku: Option<String>,
}

/// GET /api/products - list the catalog, or look up a single SKU
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ProductsQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.db.pool.clone());
    let products = match query.sku.as_deref() {
        Some(sku) => repo.find_by_sku(sku).await?.into_iter().collect(),
        None => repo.find_all().await?,
    };
    Ok(Json(products))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Product>> {
    let repo = ProductRepository::new(state.db.pool.clone());
    let product = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {}", id)))?;
    Ok(Json(product))
}

/// POST /api/products - create a product (and its inventory record)
pub async fn create(
    State(state): State<ServerState>,
    actor: CurrentActor,
    Json(payload): Json<ProductCreate>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = state.stock.create_product(payload, &actor.0).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/{id} - update descriptive fields
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    actor: CurrentActor,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    let product = state.stock.update_product(id, payload, &actor.0).await?;
    Ok(Json(product))
}

/// DELETE /api/products/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    _actor: CurrentActor,
) -> AppResult<StatusCode> {
    let repo = ProductRepository::new(state.db.pool.clone());
    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
