//! Administrative endpoints.

use crate::{ApiError, ApiResult, AppState};

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;
use log::{info, warn};
use serde::Serialize;
use sqlx::Row;

/// Outcome of `PRAGMA wal_checkpoint`
#[derive(Debug, Serialize)]
pub struct CheckpointResponse {
    /// False when a reader or writer kept the checkpoint from completing
    pub completed: bool,
    /// Frames in the WAL before the checkpoint
    pub wal_frames: i64,
    pub checkpointed_frames: i64,
}

/// POST /admin/checkpoint
///
/// Flush the write-ahead log into the main database file and truncate it,
/// e.g. before copying the database file for a backup.
pub async fn checkpoint_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<CheckpointResponse>> {
    info!("Manual checkpoint requested");

    let row = sqlx::query("PRAGMA wal_checkpoint(TRUNCATE)")
        .fetch_one(&state.pool)
        .await
        .map_err(|e| {
            log::error!("Checkpoint failed: {}", e);
            ApiError::Internal {
                message: "Database checkpoint failed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

    let busy: i64 = row.try_get(0)?;
    let response = CheckpointResponse {
        completed: busy == 0,
        wal_frames: row.try_get(1)?,
        checkpointed_frames: row.try_get(2)?,
    };

    if response.completed {
        info!(
            "Database checkpoint completed ({} frames)",
            response.checkpointed_frames
        );
    } else {
        warn!(
            "Database checkpoint incomplete: {}/{} frames",
            response.checkpointed_frames, response.wal_frames
        );
    }

    Ok(Json(response))
}
