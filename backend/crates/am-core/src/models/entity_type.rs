use crate::{CoreError, EntitySchema, Equipment, PhoneLine, Result as CoreErrorResult, TelecomPack};
use crate::TrackedEntity;

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// The kinds of record whose updates are tracked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Equipment,
    TelecomPack,
    PhoneLine,
}

impl EntityType {
    pub const ALL: [EntityType; 3] = [Self::Equipment, Self::TelecomPack, Self::PhoneLine];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equipment => "equipment",
            Self::TelecomPack => "telecom_pack",
            Self::PhoneLine => "phone_line",
        }
    }

    pub fn schema(&self) -> &'static EntitySchema {
        match self {
            Self::Equipment => Equipment::schema(),
            Self::TelecomPack => TelecomPack::schema(),
            Self::PhoneLine => PhoneLine::schema(),
        }
    }
}

impl FromStr for EntityType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "equipment" => Ok(Self::Equipment),
            "telecom_pack" => Ok(Self::TelecomPack),
            "phone_line" => Ok(Self::PhoneLine),
            _ => Err(CoreError::InvalidEntityType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
