//! Report API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use shared::models::{InventoryValuation, SalesSummary};

use crate::core::ServerState;
use crate::db::repository::ReportRepository;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

/// GET /api/reports/sales-summary?from=..&to=..
pub async fn sales_summary(
    State(state): State<ServerState>,
    Query(query): Query<SummaryQuery>,
) -> AppResult<Json<SalesSummary>> {
    let repo = ReportRepository::new(state.db.pool.clone());
    let summary = repo.sales_summary(query.from, query.to).await?;
    Ok(Json(summary))
}

/// GET /api/reports/inventory-valuation
pub async fn inventory_valuation(
    State(state): State<ServerState>,
) -> AppResult<Json<InventoryValuation>> {
    let repo = ReportRepository::new(state.db.pool.clone());
    let valuation = repo.inventory_valuation().await?;
    Ok(Json(valuation))
}
