//! Errors returned by the REST handlers.
//!
//! Every error renders as `{"error": {"code", "message", "field"?}}`. A failed
//! modification-log write has its own code so clients can tell "your change
//! was rolled back" apart from a generic storage failure.

use am_core::CoreError;
use am_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
    /// Offending payload field or header, for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Version conflict for optimistic locking (409)
    #[error("Conflict: resource was modified (current version: {current_version}) {location}")]
    Conflict {
        message: String,
        current_version: i64,
        location: ErrorLocation,
    },

    /// The modification log could not be written; the entity was left unchanged (500)
    #[error("Audit write failed: {message} {location}")]
    AuditWriteFailed {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    /// Machine-readable code carried in the response body
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Conflict { .. } => "CONFLICT",
            Self::AuditWriteFailed { .. } => "AUDIT_WRITE_FAILED",
            Self::Internal { .. } => "INTERNAL_ERROR",
            Self::BadRequest { .. } => "BAD_REQUEST",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation { .. } | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::AuditWriteFailed { .. } | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let code = self.code().to_string();
        let (message, field) = match self {
            Self::Conflict {
                message,
                current_version,
                ..
            } => (
                format!("{} (current version: {})", message, current_version),
                None,
            ),
            Self::Validation { message, field, .. } => (message, field),
            Self::NotFound { message, .. }
            | Self::AuditWriteFailed { message, .. }
            | Self::Internal { message, .. }
            | Self::BadRequest { message, .. } => (message, None),
        };

        let body = ApiErrorResponse {
            error: ApiErrorBody {
                code,
                message,
                field,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    #[track_caller]
    fn from(e: sqlx::Error) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert request body rejections to API errors
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert domain errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            CoreError::InvalidEntityType { value, .. } => ApiError::BadRequest {
                message: format!(
                    "Unknown entity type '{}'. Valid values: equipment, telecom_pack, phone_line",
                    value
                ),
                location,
            },
            CoreError::UnknownField { field, .. } | CoreError::FieldType { field, .. } => {
                ApiError::Validation {
                    message: format!("Invalid value for field '{}'", field),
                    field: Some(field),
                    location,
                }
            }
            CoreError::Validation { message, .. } => ApiError::Validation {
                message,
                field: None,
                location,
            },
            CoreError::Uuid { source, .. } => ApiError::Validation {
                message: format!("Invalid UUID format: {}", source),
                field: None,
                location,
            },
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            DbError::NotFound { entity_type, id, .. } => ApiError::NotFound {
                message: format!("{} {} not found", entity_type, id),
                location,
            },
            DbError::Conflict {
                entity_type,
                id,
                current_version,
                ..
            } => ApiError::Conflict {
                message: format!("{} {} was modified by another request", entity_type, id),
                current_version,
                location,
            },
            DbError::UnknownUser { user_id, .. } => ApiError::Validation {
                message: format!("Unknown user {}", user_id),
                field: Some("X-User-Id".to_string()),
                location,
            },
            DbError::AuditWrite {
                entity_type,
                entity_id,
                source,
                ..
            } => {
                log::error!("Audit write error: {}", source);
                ApiError::AuditWriteFailed {
                    message: format!(
                        "{} {} was not updated: its modification history could not be recorded",
                        entity_type, entity_id
                    ),
                    location,
                }
            }
            DbError::Core { source, .. } => ApiError::from(source),
            DbError::Sqlx { source, .. } => {
                log::error!("Database error: {}", source);
                match source {
                    sqlx::Error::RowNotFound => ApiError::NotFound {
                        message: "Resource not found".to_string(),
                        location,
                    },
                    sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                        ApiError::Validation {
                            message: "A record with the same unique value already exists"
                                .to_string(),
                            field: None,
                            location,
                        }
                    }
                    _ => ApiError::Internal {
                        message: "Database operation failed".to_string(),
                        location,
                    },
                }
            }
            DbError::Migration { message, .. } => ApiError::Internal {
                message: format!("Database migration error: {}", message),
                location,
            },
            DbError::Initialization { message, .. } => ApiError::Internal {
                message: format!("Database initialization error: {}", message),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
