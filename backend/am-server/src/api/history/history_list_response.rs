use am_core::{EntityType, ModificationRecordView};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HistoryListResponse {
    pub entity_type: EntityType,
    /// Most recent first
    pub records: Vec<ModificationRecordView>,
}
