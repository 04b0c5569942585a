//! Modification history REST API handlers

use crate::{ApiResult, AppState, HistoryListResponse, HistoryResetResponse};

use am_core::EntityType;
use am_db::HistoryService;

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, State},
};
use log::warn;
use uuid::Uuid;

/// GET /api/v1/history/{entity_type}
pub async fn list_history(
    State(state): State<AppState>,
    Path(entity_type): Path<String>,
) -> ApiResult<Json<HistoryListResponse>> {
    let entity_type = EntityType::from_str(&entity_type)?;

    let records = HistoryService::list(&state.pool, entity_type).await?;

    Ok(Json(HistoryListResponse {
        entity_type,
        records,
    }))
}

/// GET /api/v1/history/{entity_type}/{entity_id}
pub async fn list_entity_history(
    State(state): State<AppState>,
    Path((entity_type, entity_id)): Path<(String, String)>,
) -> ApiResult<Json<HistoryListResponse>> {
    let entity_type = EntityType::from_str(&entity_type)?;
    let entity_id = Uuid::parse_str(&entity_id)?;

    let records = HistoryService::list_for_entity(&state.pool, entity_type, entity_id).await?;

    Ok(Json(HistoryListResponse {
        entity_type,
        records,
    }))
}

/// DELETE /api/v1/history/{entity_type}
///
/// Irreversibly deletes every modification record of the entity type.
/// Any confirmation step belongs to the client.
pub async fn reset_history(
    State(state): State<AppState>,
    Path(entity_type): Path<String>,
) -> ApiResult<Json<HistoryResetResponse>> {
    let entity_type = EntityType::from_str(&entity_type)?;

    warn!("History reset requested for {}", entity_type);
    let deleted = HistoryService::reset(&state.pool, entity_type).await?;
    state.metrics.history_reset(entity_type, deleted);

    Ok(Json(HistoryResetResponse {
        entity_type,
        deleted,
    }))
}
