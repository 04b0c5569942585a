use crate::{EntityType, FieldDelta};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One field-level change written to the modification log. Immutable once
/// stored; only removed by a reset of its whole entity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModificationRecord {
    pub id: Uuid,

    pub entity_type: EntityType,
    pub entity_id: Uuid,
    pub user_id: Uuid,

    pub field_name: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,

    pub modified_at: DateTime<Utc>,
}

impl ModificationRecord {
    pub fn from_delta(
        entity_type: EntityType,
        entity_id: Uuid,
        user_id: Uuid,
        delta: &FieldDelta,
        modified_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            entity_type,
            entity_id,
            user_id,
            field_name: delta.field.clone(),
            old_value: delta.old_value.clone(),
            new_value: delta.new_value.clone(),
            modified_at,
        }
    }
}
