use crate::{EntityMetadata, EntitySchema, FieldValue, NormalizedPayload, RawField};
use crate::Result as CoreErrorResult;

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// Current domain field values of an entity, keyed by field name
pub type FieldMap = HashMap<&'static str, FieldValue>;

/// Typed inbound payload for one entity type
pub trait EntityPayload: DeserializeOwned + Send + Sync {
    /// Every declared field in declaration order, including absent ones
    fn fields(&self) -> Vec<(&'static str, &RawField)>;

    /// Version the client last saw, for optimistic locking
    fn expected_version(&self) -> Option<i64> {
        None
    }
}

/// An entity whose updates are diffed and written to the modification log.
pub trait TrackedEntity: Clone + Serialize + Send + Sync + Unpin + 'static {
    type Payload: EntityPayload;

    fn schema() -> &'static EntitySchema;

    /// An entity with the given metadata and every domain field unset
    fn blank(metadata: EntityMetadata) -> Self;

    fn metadata(&self) -> &EntityMetadata;

    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    fn snapshot(&self) -> FieldMap;

    fn assign(&mut self, field: &str, value: FieldValue) -> CoreErrorResult<()>;

    fn id(&self) -> Uuid {
        self.metadata().id
    }

    fn version(&self) -> i64 {
        self.metadata().version
    }

    /// Assign every non-bookkeeping field of a normalized payload. Fields the
    /// payload does not carry are left untouched.
    fn apply(&mut self, payload: &NormalizedPayload) -> CoreErrorResult<()> {
        let schema = Self::schema();
        for (field, value) in payload.iter() {
            if schema.is_excluded(field) {
                continue;
            }
            self.assign(field, value.clone())?;
        }
        Ok(())
    }

    fn from_record<I>(metadata: EntityMetadata, fields: I) -> CoreErrorResult<Self>
    where
        I: IntoIterator<Item = (&'static str, FieldValue)>,
    {
        let mut entity = Self::blank(metadata);
        for (field, value) in fields {
            entity.assign(field, value)?;
        }
        Ok(entity)
    }
}
