//! Sale API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use shared::models::{Sale, SaleCreate, SaleReceipt};

use crate::core::ServerState;
use crate::db::repository::SaleRepository;
use crate::identity::CurrentActor;
use crate::utils::{AppError, AppResult};

const DEFAULT_SALE_LIMIT: i64 = 100;

/// POST /api/sales - record a sale (the atomic deduct-and-log flow)
pub async fn record(
    State(state): State<ServerState>,
    actor: CurrentActor,
    Json(payload): Json<SaleCreate>,
) -> AppResult<(StatusCode, Json<SaleReceipt>)> {
    let receipt = state.sale_recorder.record_sale(payload, &actor.0).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

#[derive(Debug, Deserialize)]
pub struct SalesQuery {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub limit: Option<i64>,
}

/// GET /api/sales - sale history, newest first, optional date range
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<SalesQuery>,
) -> AppResult<Json<Vec<Sale>>> {
    let repo = SaleRepository::new(state.db.pool.clone());
    let limit = query.limit.unwrap_or(DEFAULT_SALE_LIMIT).clamp(1, 1000);
    let sales = repo.find_all(query.from, query.to, limit).await?;
    Ok(Json(sales))
}

/// GET /api/sales/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Sale>> {
    let repo = SaleRepository::new(state.db.pool.clone());
    let sale = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Sale {}", id)))?;
    Ok(Json(sale))
}
