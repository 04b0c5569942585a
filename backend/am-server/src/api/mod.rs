pub mod delete_response;
pub mod entities;
pub mod error;
pub mod extractors;
pub mod history;
pub mod users;
