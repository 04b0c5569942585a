pub mod entity_repository;
pub mod modification_log_repository;
pub(crate) mod row_decode;
pub mod user_repository;
