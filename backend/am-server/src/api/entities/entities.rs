//! Entity REST API handlers
//!
//! One set of handlers serves equipments, telecom packs and phone lines; the
//! router instantiates them once per entity type.

use crate::{
    ApiError, ApiJson, ApiResult, AppState, DeleteResponse, EntityListResponse, EntityResponse,
    UserId,
};

use am_core::TrackedEntity;
use am_db::{DbError, EntityRepository, EntityService, UpdateOutcome};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use error_location::ErrorLocation;
use http::StatusCode;
use uuid::Uuid;

/// GET /api/v1/{entities}
pub async fn list_entities<T: TrackedEntity>(
    State(state): State<AppState>,
) -> ApiResult<Json<EntityListResponse<T>>> {
    let entities = EntityRepository::find_all::<T, _>(&state.pool).await?;

    Ok(Json(EntityListResponse { entities }))
}

/// GET /api/v1/{entities}/{id}
pub async fn get_entity<T: TrackedEntity>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<EntityResponse<T>>> {
    let entity_id = Uuid::parse_str(&id)?;

    let entity = EntityRepository::find_by_id::<T, _>(&state.pool, entity_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("{} {} not found", T::schema().entity_type, id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(EntityResponse { entity }))
}

/// POST /api/v1/{entities}
///
/// Create an entity. Creation is not recorded in the modification log.
pub async fn create_entity<T: TrackedEntity>(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<T::Payload>,
) -> ApiResult<(StatusCode, Json<EntityResponse<T>>)> {
    let entity = EntityService::create::<T>(&state.pool, &payload).await?;

    Ok((StatusCode::CREATED, Json(EntityResponse { entity })))
}

/// PUT /api/v1/{entities}/{id}
///
/// Partial update: fields missing from the body are left untouched. Every
/// changed field is recorded against the acting user.
pub async fn update_entity<T: TrackedEntity>(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<T::Payload>,
) -> ApiResult<Json<UpdateOutcome<T>>> {
    let entity_id = Uuid::parse_str(&id)?;
    let entity_type = T::schema().entity_type;

    match EntityService::update::<T>(&state.pool, entity_id, &payload, user_id).await {
        Ok(outcome) => {
            state
                .metrics
                .update_applied(entity_type, outcome.changes.len());
            Ok(Json(outcome))
        }
        Err(e) => {
            match e {
                DbError::AuditWrite { .. } => state.metrics.audit_write_failed(entity_type),
                DbError::Conflict { .. } => state.metrics.conflict(entity_type),
                _ => {}
            }
            Err(e.into())
        }
    }
}

/// DELETE /api/v1/{entities}/{id}
///
/// Hard delete. The entity's modification history is kept.
pub async fn delete_entity<T: TrackedEntity>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let entity_id = Uuid::parse_str(&id)?;

    EntityService::delete::<T>(&state.pool, entity_id).await?;

    Ok(Json(DeleteResponse { deleted_id: id }))
}
