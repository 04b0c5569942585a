//! Axum extractor for the acting user

use crate::{ApiError, AppState};

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;
use uuid::Uuid;

/// Extracts the acting user ID from the request
///
/// Uses the `X-User-Id` header when present; a header that is not a UUID is
/// rejected rather than credited to someone else. Without the header the
/// configured system user is the actor.
pub struct UserId(pub Uuid);

impl FromRequestParts<AppState> for UserId {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            if let Some(header_value) = parts.headers.get("X-User-Id") {
                let raw = header_value.to_str().unwrap_or_default();
                return match Uuid::parse_str(raw.trim()) {
                    Ok(uuid) => {
                        log::debug!("Using user ID from X-User-Id header: {}", uuid);
                        Ok(UserId(uuid))
                    }
                    Err(e) => Err(ApiError::Validation {
                        message: format!("X-User-Id must be a user UUID: {}", e),
                        field: Some("X-User-Id".to_string()),
                        location: ErrorLocation::from(Location::caller()),
                    }),
                };
            }

            let system_user_id = state.api_config.system_user_uuid();
            log::debug!("Using system user ID: {}", system_user_id);

            Ok(UserId(system_user_id))
        }
    }
}
