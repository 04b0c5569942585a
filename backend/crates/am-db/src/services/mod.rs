pub mod entity_service;
pub mod history_service;
