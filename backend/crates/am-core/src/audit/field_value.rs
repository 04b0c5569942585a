use crate::{CoreError, FieldKind, RawField, Result as CoreErrorResult};

use std::panic::Location;

use chrono::NaiveDate;
use error_location::ErrorLocation;

/// Storage and display format for date fields
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Canonical, comparable value of one entity field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Text(String),
    Date(NaiveDate),
    Number(f64),
}

impl FieldValue {
    pub fn text<S: Into<String>>(value: S) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// String form written to the modification log
    pub fn to_display(&self) -> Option<String> {
        match self {
            FieldValue::Null => None,
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Date(d) => Some(d.format(DATE_FORMAT).to_string()),
            FieldValue::Number(n) => Some(n.to_string()),
        }
    }

    /// Wire form of this value, as a client echoing it back would send it
    pub fn to_raw(&self) -> RawField {
        match self.to_display() {
            Some(s) => RawField::Value(s),
            None => RawField::Null,
        }
    }

    pub fn from_text(value: &Option<String>) -> Self {
        value
            .as_ref()
            .map_or(FieldValue::Null, |s| FieldValue::Text(s.clone()))
    }

    pub fn from_date(value: Option<NaiveDate>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Date)
    }

    pub fn from_number(value: Option<f64>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Number)
    }

    #[track_caller]
    pub fn into_text(self, field: &str) -> CoreErrorResult<Option<String>> {
        match self {
            FieldValue::Null => Ok(None),
            FieldValue::Text(s) => Ok(Some(s)),
            _ => Err(Self::type_error(field, FieldKind::Text)),
        }
    }

    #[track_caller]
    pub fn into_date(self, field: &str) -> CoreErrorResult<Option<NaiveDate>> {
        match self {
            FieldValue::Null => Ok(None),
            FieldValue::Date(d) => Ok(Some(d)),
            _ => Err(Self::type_error(field, FieldKind::Date)),
        }
    }

    #[track_caller]
    pub fn into_number(self, field: &str) -> CoreErrorResult<Option<f64>> {
        match self {
            FieldValue::Null => Ok(None),
            FieldValue::Number(n) => Ok(Some(n)),
            _ => Err(Self::type_error(field, FieldKind::Number)),
        }
    }

    #[track_caller]
    fn type_error(field: &str, expected: FieldKind) -> CoreError {
        CoreError::FieldType {
            field: field.to_string(),
            expected,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
