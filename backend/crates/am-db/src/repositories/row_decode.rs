use crate::{DbError, Result as DbErrorResult};

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

/// Decode a TEXT column holding a UUID
pub(crate) fn uuid_column(row: &SqliteRow, column: &str) -> DbErrorResult<Uuid> {
    let raw: String = row.try_get(column)?;
    Uuid::parse_str(&raw)
        .map_err(|e| DbError::corrupt_row(format!("Invalid UUID in {}: {}", column, e)))
}

/// Decode an INTEGER column holding Unix milliseconds
pub(crate) fn timestamp_column(row: &SqliteRow, column: &str) -> DbErrorResult<DateTime<Utc>> {
    let millis: i64 = row.try_get(column)?;
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| DbError::corrupt_row(format!("Invalid timestamp in {}", column)))
}
