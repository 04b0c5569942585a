#[allow(clippy::module_inception)]
pub mod history;
pub mod history_list_response;
pub mod history_reset_response;
