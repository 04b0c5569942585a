use am_core::{CoreError, EntityType};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

/// Primary SQLite result code for a lock held by another connection
const SQLITE_BUSY: i32 = 5;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Core {
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("{entity_type} not found: {id} {location}")]
    NotFound {
        entity_type: EntityType,
        id: Uuid,
        location: ErrorLocation,
    },

    #[error("{entity_type} {id} was modified concurrently (current version {current_version}) {location}")]
    Conflict {
        entity_type: EntityType,
        id: Uuid,
        current_version: i64,
        location: ErrorLocation,
    },

    #[error("Unknown acting user: {user_id} {location}")]
    UnknownUser {
        user_id: Uuid,
        location: ErrorLocation,
    },

    /// The modification log batch could not be written. The entity update
    /// that produced it has been rolled back.
    #[error("Audit write failed for {entity_type} {entity_id}: {source} {location}")]
    AuditWrite {
        source: Box<DbError>,
        entity_type: EntityType,
        entity_id: Uuid,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn not_found(entity_type: EntityType, id: Uuid) -> Self {
        Self::NotFound {
            entity_type,
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict(entity_type: EntityType, id: Uuid, current_version: i64) -> Self {
        Self::Conflict {
            entity_type,
            id,
            current_version,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True when SQLite gave up waiting for another connection's write lock.
    /// Extended codes (e.g. 517, `SQLITE_BUSY_SNAPSHOT`) count as busy too.
    pub fn is_busy(&self) -> bool {
        match self {
            Self::Sqlx {
                source: sqlx::Error::Database(db),
                ..
            } => db
                .code()
                .and_then(|code| code.parse::<i32>().ok())
                .is_some_and(|code| code & 0xff == SQLITE_BUSY),
            _ => false,
        }
    }

    #[track_caller]
    pub fn corrupt_row(message: impl Into<String>) -> Self {
        Self::Initialization {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    #[track_caller]
    fn from(source: sqlx::migrate::MigrateError) -> Self {
        Self::Migration {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for DbError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
