pub mod audit;
pub mod error;
pub mod models;


pub use audit::change_detector::detect_changes;
pub use audit::entity_schema::{BOOKKEEPING_FIELDS, EntitySchema, FieldKind, FieldSpec};
pub use audit::field_delta::{FieldDelta, FieldDeltaBuilder};
pub use audit::field_value::{DATE_FORMAT, FieldValue};
pub use audit::normalizer::{NormalizedPayload, normalize, normalize_complete, normalize_value};
pub use audit::raw_field::RawField;
pub use audit::tracked_entity::{EntityPayload, FieldMap, TrackedEntity};
pub use error::{CoreError, Result};
pub use models::entity_metadata::{EntityMetadata, current_timestamp};
pub use models::entity_type::EntityType;
pub use models::equipment::{EQUIPMENT_SCHEMA, Equipment};
pub use models::equipment_payload::EquipmentPayload;
pub use models::modification_record::ModificationRecord;
pub use models::modification_record_view::ModificationRecordView;
pub use models::phone_line::{PHONE_LINE_SCHEMA, PhoneLine};
pub use models::phone_line_payload::PhoneLinePayload;
pub use models::telecom_pack::{TELECOM_PACK_SCHEMA, TelecomPack};
pub use models::telecom_pack_payload::TelecomPackPayload;
pub use models::user::User;

/// Placeholder stored in text fields left empty, so that "unset" looks and
/// compares the same everywhere
pub const UNSET_SENTINEL: &str = "------";
