pub mod admin;
pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;


pub use api::{
    delete_response::DeleteResponse,
    entities::{
        entities::{create_entity, delete_entity, get_entity, list_entities, update_entity},
        entity_list_response::EntityListResponse,
        entity_response::EntityResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::{api_json::ApiJson, user_id::UserId},
    history::{
        history::{list_entity_history, list_history, reset_history},
        history_list_response::HistoryListResponse,
        history_reset_response::HistoryResetResponse,
    },
    users::{
        create_user_request::CreateUserRequest,
        user_list_response::UserListResponse,
        users::{create_user, list_users},
    },
};
pub use app_state::AppState;
pub use metrics::AuditMetrics;
pub use routes::build_router;
