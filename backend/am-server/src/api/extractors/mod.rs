pub mod api_json;
pub mod user_id;
