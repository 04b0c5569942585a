//! Entity update orchestration.
//!
//! An update loads the current row, normalizes the payload, diffs it, writes
//! the row and writes the modification log, all inside one transaction. A
//! failed log write therefore never leaves an entity changed without an
//! audit trail.

use crate::{
    DbError, EntityRepository, ModificationLogRepository, Result as DbErrorResult, UserRepository,
};

use am_core::{
    EntityMetadata, EntityPayload, FieldDelta, ModificationRecord, TrackedEntity,
    current_timestamp, detect_changes, normalize, normalize_complete,
};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{error, info, warn};
use serde::Serialize;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Result of a successful update: the persisted entity and the field deltas
/// written to the modification log for it
#[derive(Debug, Clone, Serialize)]
pub struct UpdateOutcome<T> {
    pub entity: T,
    pub changes: Vec<FieldDelta>,
}

pub struct EntityService;

impl EntityService {
    /// Create an entity from a payload. Every domain field is normalized,
    /// absent ones included. No modification records are written.
    pub async fn create<T: TrackedEntity>(
        pool: &SqlitePool,
        payload: &T::Payload,
    ) -> DbErrorResult<T> {
        let normalized = normalize_complete(payload.fields(), T::schema());

        let mut entity = T::blank(EntityMetadata::new());
        entity.apply(&normalized)?;

        EntityRepository::create(pool, &entity).await?;

        info!("Created {} {}", T::schema().entity_type, entity.id());

        Ok(entity)
    }

    /// Apply a partial update and record one modification per changed field.
    ///
    /// Fails with `NotFound` for an unknown id, `UnknownUser` when the acting
    /// user does not exist, `Conflict` when the payload's expected version is
    /// stale or a concurrent writer won the race, and `AuditWrite` when the
    /// log batch cannot be stored (the entity update is rolled back).
    pub async fn update<T: TrackedEntity>(
        pool: &SqlitePool,
        id: Uuid,
        payload: &T::Payload,
        acting_user: Uuid,
    ) -> DbErrorResult<UpdateOutcome<T>> {
        let schema = T::schema();
        let entity_type = schema.entity_type;

        // IMMEDIATE takes the write lock before the read, so concurrent
        // updates of one row are serialized instead of diffing a stale snapshot
        let mut tx = match pool.begin_with("BEGIN IMMEDIATE").await {
            Ok(tx) => tx,
            Err(e) => {
                let e = DbError::from(e);
                if e.is_busy() {
                    return Err(Self::contended::<T>(pool, id).await);
                }
                return Err(e);
            }
        };

        if !UserRepository::exists(&mut *tx, acting_user).await? {
            return Err(DbError::UnknownUser {
                user_id: acting_user,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut entity = EntityRepository::find_by_id::<T, _>(&mut *tx, id)
            .await?
            .ok_or_else(|| DbError::not_found(entity_type, id))?;

        let current_version = entity.version();
        if let Some(expected) = payload.expected_version()
            && expected != current_version
        {
            warn!(
                "Rejecting update of {} {}: expected version {}, found {}",
                entity_type, id, expected, current_version
            );
            return Err(DbError::conflict(entity_type, id, current_version));
        }

        let normalized = normalize(payload.fields(), schema);
        let changes = detect_changes(&entity.snapshot(), &normalized, schema.excluded());

        entity.apply(&normalized)?;
        let modified_at = current_timestamp();
        {
            let metadata = entity.metadata_mut();
            metadata.version = current_version + 1;
            metadata.updated_at = modified_at;
        }

        match EntityRepository::update(&mut *tx, &entity, current_version).await {
            Ok(true) => {}
            Ok(false) => {
                warn!(
                    "Concurrent update of {} {} detected at version {}",
                    entity_type, id, current_version
                );
                return Err(DbError::conflict(entity_type, id, current_version));
            }
            Err(e) if e.is_busy() => {
                warn!(
                    "Write lock on {} {} lost at version {}: {}",
                    entity_type, id, current_version, e
                );
                return Err(DbError::conflict(entity_type, id, current_version));
            }
            Err(e) => return Err(e),
        }

        let records: Vec<ModificationRecord> = changes
            .iter()
            .map(|delta| {
                ModificationRecord::from_delta(entity_type, id, acting_user, delta, modified_at)
            })
            .collect();

        if let Err(e) = ModificationLogRepository::write_batch(&mut *tx, &records).await {
            error!(
                "Modification log write failed for {} {}, rolling back: {}",
                entity_type,
                id,
                e
            );
            return Err(DbError::AuditWrite {
                source: Box::new(e),
                entity_type,
                entity_id: id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        tx.commit().await?;

        info!(
            "Updated {} {} to version {} by {} ({} field(s) changed)",
            entity_type,
            id,
            current_version + 1,
            acting_user,
            changes.len()
        );

        Ok(UpdateOutcome { entity, changes })
    }

    /// Error for an update that could not get the write lock within the busy
    /// timeout: `Conflict` at the version the winning writer left behind.
    async fn contended<T: TrackedEntity>(pool: &SqlitePool, id: Uuid) -> DbError {
        let entity_type = T::schema().entity_type;

        match EntityRepository::find_by_id::<T, _>(pool, id).await {
            Ok(Some(current)) => {
                warn!(
                    "Timed out waiting to update {} {} (now at version {})",
                    entity_type,
                    id,
                    current.version()
                );
                DbError::conflict(entity_type, id, current.version())
            }
            Ok(None) => DbError::not_found(entity_type, id),
            Err(e) => e,
        }
    }

    /// Hard delete. The entity's modification records are kept.
    pub async fn delete<T: TrackedEntity>(pool: &SqlitePool, id: Uuid) -> DbErrorResult<()> {
        let entity_type = T::schema().entity_type;

        if !EntityRepository::delete::<T, _>(pool, id).await? {
            return Err(DbError::not_found(entity_type, id));
        }

        info!("Deleted {} {}", entity_type, id);

        Ok(())
    }
}
