use crate::FieldKind;

use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid entity type: {value} {location}")]
    InvalidEntityType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Unknown field '{field}' for {entity_type} {location}")]
    UnknownField {
        entity_type: &'static str,
        field: String,
        location: ErrorLocation,
    },

    #[error("Field '{field}' expects a {expected} value {location}")]
    FieldType {
        field: String,
        expected: FieldKind,
        location: ErrorLocation,
    },

    #[error("UUID parse error: {source} {location}")]
    Uuid {
        source: uuid::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;

impl CoreError {
    #[track_caller]
    pub fn unknown_field(entity_type: &'static str, field: &str) -> Self {
        CoreError::UnknownField {
            entity_type,
            field: field.to_string(),
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}

impl From<uuid::Error> for CoreError {
    #[track_caller]
    fn from(source: uuid::Error) -> Self {
        CoreError::Uuid {
            source,
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}
