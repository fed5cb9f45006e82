//! Alert API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{Alert, AlertResolveRequest, AlertStatus};

use crate::core::ServerState;
use crate::db::repository::AlertRepository;
use crate::identity::CurrentActor;
use crate::utils::{AppError, AppResponse, AppResult, ok_with_message};

#[derive(Debug, Deserialize)]
pub struct AlertsQuery {
    pub status: Option<AlertStatus>,
}

/// GET /api/alerts?status=active - list alerts, optionally filtered
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<AlertsQuery>,
) -> AppResult<Json<Vec<Alert>>> {
    let repo = AlertRepository::new(state.db.pool.clone());
    let alerts = repo.find_all(query.status).await?;
    Ok(Json(alerts))
}

/// GET /api/alerts/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Alert>> {
    let repo = AlertRepository::new(state.db.pool.clone());
    let alert = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Alert {}", id)))?;
    Ok(Json(alert))
}

/// POST /api/alerts/{id}/resolve - only valid on active alerts
pub async fn resolve(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    actor: CurrentActor,
    payload: Option<Json<AlertResolveRequest>>,
) -> AppResult<Json<AppResponse<()>>> {
    let reason = payload.as_ref().and_then(|p| p.reason.as_deref());
    state.alert_engine.resolve(id, &actor.0, reason).await?;
    Ok(ok_with_message((), "Alert resolved"))
}

/// POST /api/alerts/{id}/dismiss
pub async fn dismiss(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    actor: CurrentActor,
) -> AppResult<Json<AppResponse<()>>> {
    state.alert_engine.dismiss(id, &actor.0).await?;
    Ok(ok_with_message((), "Alert dismissed"))
}
