pub mod create_user_request;
pub mod user_list_response;
pub mod users;
