use crate::{ApiError, AppState, UserId};

use am_config::{ApiConfig, DEFAULT_SYSTEM_USER_ID};

use axum::{body::Body, extract::FromRequestParts, http::Request};
use googletest::prelude::*;
use sqlx::SqlitePool;
use uuid::Uuid;

const CONFIGURED_SYSTEM_USER: &str = "5a1c3e2b-7d4f-4c8e-9b6a-0f1e2d3c4b5a";

async fn state_with_system_user(system_user_id: &str) -> AppState {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test pool");

    AppState::new(
        pool,
        ApiConfig {
            system_user_id: system_user_id.to_string(),
            ..ApiConfig::default()
        },
    )
}

async fn try_extract(state: &AppState, header: Option<&str>) -> Result<Uuid, ApiError> {
    let mut builder = Request::builder();
    if let Some(value) = header {
        builder = builder.header("X-User-Id", value);
    }
    let (mut parts, _body) = builder.body(Body::empty()).unwrap().into_parts();

    UserId::from_request_parts(&mut parts, state)
        .await
        .map(|UserId(user_id)| user_id)
}

async fn extract(state: &AppState, header: Option<&str>) -> Uuid {
    try_extract(state, header)
        .await
        .expect("header should be accepted")
}

#[tokio::test]
async fn header_user_takes_precedence_over_system_user() {
    let state = state_with_system_user(CONFIGURED_SYSTEM_USER).await;
    let acting = Uuid::new_v4();

    let user_id = extract(&state, Some(&acting.to_string())).await;

    assert_that!(user_id, eq(acting));
}

#[tokio::test]
async fn missing_header_credits_configured_system_user() {
    let state = state_with_system_user(CONFIGURED_SYSTEM_USER).await;

    let user_id = extract(&state, None).await;

    assert_that!(user_id.to_string(), eq(CONFIGURED_SYSTEM_USER));
}

#[tokio::test]
async fn malformed_header_is_rejected_not_credited_to_system_user() {
    let state = state_with_system_user(CONFIGURED_SYSTEM_USER).await;

    let result = try_extract(&state, Some("not-a-uuid")).await;

    match result {
        Err(ApiError::Validation { field, .. }) => {
            assert_that!(field, some(eq("X-User-Id")));
        }
        other => panic!("expected a validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn empty_header_is_rejected() {
    let state = state_with_system_user(CONFIGURED_SYSTEM_USER).await;

    let result = try_extract(&state, Some("")).await;

    assert!(matches!(result, Err(ApiError::Validation { .. })));
}

#[tokio::test]
async fn invalid_configured_system_user_falls_back_to_default() {
    let state = state_with_system_user("nobody").await;

    let user_id = extract(&state, None).await;

    assert_that!(user_id.to_string(), eq(DEFAULT_SYSTEM_USER_ID));
}
