use crate::{ModificationLogRepository, Result as DbErrorResult};

use am_core::{EntityType, ModificationRecordView};

use log::info;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct HistoryService;

impl HistoryService {
    /// Modification history of one entity type, most recent first
    pub async fn list(
        pool: &SqlitePool,
        entity_type: EntityType,
    ) -> DbErrorResult<Vec<ModificationRecordView>> {
        ModificationLogRepository::find_by_entity_type(pool, entity_type).await
    }

    /// Modification history of a single entity, most recent first
    pub async fn list_for_entity(
        pool: &SqlitePool,
        entity_type: EntityType,
        entity_id: Uuid,
    ) -> DbErrorResult<Vec<ModificationRecordView>> {
        ModificationLogRepository::find_by_entity(pool, entity_type, entity_id).await
    }

    /// Delete every modification record of an entity type. Irreversible.
    pub async fn reset(pool: &SqlitePool, entity_type: EntityType) -> DbErrorResult<u64> {
        let deleted = ModificationLogRepository::delete_by_entity_type(pool, entity_type).await?;

        info!(
            "Reset {} history: {} record(s) deleted",
            entity_type, deleted
        );

        Ok(deleted)
    }
}
