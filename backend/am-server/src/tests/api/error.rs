use crate::ApiError;

use am_core::{CoreError, EntityType};
use am_db::DbError;

use std::panic::Location;
use std::str::FromStr;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;
use uuid::Uuid;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Item not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Item not found");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Invalid email".into(),
        field: Some("email".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn test_conflict_error_returns_409_with_version() {
    let error = ApiError::Conflict {
        message: "Version mismatch".into(),
        current_version: 5,
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
    assert!(json["error"]["message"].as_str().unwrap().contains("5"));
}

#[tokio::test]
async fn test_audit_write_failure_is_distinct_from_internal_error() {
    let source = DbError::Initialization {
        message: "disk full".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let error = ApiError::from(DbError::AuditWrite {
        source: Box::new(source),
        entity_type: EntityType::Equipment,
        entity_id: Uuid::new_v4(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "AUDIT_WRITE_FAILED");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database connection failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_uuid_error_converts_to_validation() {
    let uuid_error = Uuid::parse_str("not-a-uuid").unwrap_err();

    let api_error: ApiError = uuid_error.into();

    assert!(matches!(api_error, ApiError::Validation { .. }));
}

#[test]
fn test_db_not_found_converts_to_not_found() {
    let id = Uuid::new_v4();

    let api_error: ApiError = DbError::not_found(EntityType::PhoneLine, id).into();

    match api_error {
        ApiError::NotFound { message, .. } => assert!(message.contains(&id.to_string())),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_db_conflict_keeps_current_version() {
    let api_error: ApiError = DbError::conflict(EntityType::Equipment, Uuid::new_v4(), 7).into();

    assert!(matches!(
        api_error,
        ApiError::Conflict {
            current_version: 7,
            ..
        }
    ));
}

#[test]
fn test_invalid_entity_type_converts_to_bad_request() {
    let core_error: CoreError = EntityType::from_str("printer").unwrap_err();

    let api_error: ApiError = core_error.into();

    assert!(matches!(api_error, ApiError::BadRequest { .. }));
}
