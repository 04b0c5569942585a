#[allow(clippy::module_inception)]
pub mod entities;
pub mod entity_list_response;
pub mod entity_response;
