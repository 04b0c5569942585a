use am_core::EntityType;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HistoryResetResponse {
    pub entity_type: EntityType,
    pub deleted: u64,
}
