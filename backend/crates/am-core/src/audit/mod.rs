pub mod change_detector;
pub mod entity_schema;
pub mod field_delta;
pub mod field_value;
pub mod normalizer;
pub mod raw_field;
pub mod tracked_entity;
