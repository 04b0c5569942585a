//! User REST API handlers

use crate::{ApiError, ApiJson, ApiResult, AppState, CreateUserRequest, UserListResponse};

use am_core::User;
use am_db::UserRepository;

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;
use http::StatusCode;

/// GET /api/v1/users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<UserListResponse>> {
    let users = UserRepository::find_all(&state.pool).await?;

    Ok(Json(UserListResponse { users }))
}

/// POST /api/v1/users
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let email = req.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::Validation {
            message: format!("Invalid email address: '{}'", req.email),
            field: Some("email".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let name = req
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());
    let user = User::new(email.to_string(), name);

    UserRepository::create(&state.pool, &user).await?;
    log::info!("Created user {} ({})", user.email, user.id);

    Ok((StatusCode::CREATED, Json(user)))
}
