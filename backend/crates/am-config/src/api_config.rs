use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;
use uuid::Uuid;

/// Well-known id of the system user, credited with changes when a request
/// carries no `X-User-Id` header
pub const DEFAULT_SYSTEM_USER_ID: &str = "00000000-0000-0000-0000-000000000001";
/// Default display name for the system user
pub const DEFAULT_SYSTEM_USER_NAME: &str = "Administrateur système";

const DEFAULT_SYSTEM_USER_UUID: Uuid = Uuid::from_u128(1);

/// Configuration for the REST API layer
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub system_user_id: String,
    pub system_user_name: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            system_user_id: DEFAULT_SYSTEM_USER_ID.to_string(),
            system_user_name: DEFAULT_SYSTEM_USER_NAME.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Uuid::parse_str(&self.system_user_id).map_err(|e| {
            ConfigError::api(format!(
                "api.system_user_id must be a UUID, got '{}': {}",
                self.system_user_id, e
            ))
        })?;
        Ok(())
    }

    /// Parse the system user id, falling back to the default when invalid
    pub fn system_user_uuid(&self) -> Uuid {
        Uuid::parse_str(&self.system_user_id).unwrap_or(DEFAULT_SYSTEM_USER_UUID)
    }

    /// Placeholder address stored for the system user
    pub fn system_user_email(&self) -> String {
        format!("{}@system.local", self.system_user_uuid())
    }
}
