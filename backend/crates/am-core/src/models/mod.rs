pub mod entity_metadata;
pub mod entity_type;
pub mod equipment;
pub mod equipment_payload;
pub mod modification_record;
pub mod modification_record_view;
pub mod phone_line;
pub mod phone_line_payload;
pub mod telecom_pack;
pub mod telecom_pack_payload;
pub mod user;
